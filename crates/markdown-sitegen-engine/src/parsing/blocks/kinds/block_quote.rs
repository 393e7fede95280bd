/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when every line starts with the prefix.
    pub fn is_quote(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one `>` and at most one following space from a line.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// The quote text with the prefix removed from every line.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
