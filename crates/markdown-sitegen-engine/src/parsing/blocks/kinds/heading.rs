/// ATX heading block type: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with a heading prefix.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.chars().take_while(|c| *c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        if block[hashes..].starts_with(' ') {
            u8::try_from(hashes).ok()
        } else {
            None
        }
    }

    /// Strips the `#` run and the single space after it.
    pub fn content(block: &str, level: u8) -> &str {
        let prefix = usize::from(level) + 1;
        block.get(prefix..).unwrap_or("")
    }
}
