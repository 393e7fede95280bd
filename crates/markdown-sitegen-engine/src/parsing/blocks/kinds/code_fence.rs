/// Fenced code block type.
///
/// The block must both start and end with the fence. Single-line blocks such
/// as ```` ```print('x')``` ```` are fenced too.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Removes exactly one fence from each end.
    ///
    /// A block too short to hold two separate fences has no content.
    pub fn content(block: &str) -> &str {
        block
            .strip_prefix(Self::BACKTICKS)
            .and_then(|rest| rest.strip_suffix(Self::BACKTICKS))
            .unwrap_or("")
    }
}
