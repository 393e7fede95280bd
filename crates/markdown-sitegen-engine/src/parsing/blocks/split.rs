/// Separator between blocks. Longer runs of newlines leave empty or
/// newline-only fragments behind, which trimming and the length filter drop.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed block strings, in document order.
///
/// Any fragment whose trimmed length is zero or one character is discarded.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| block.chars().count() > 1)
        .collect()
}
