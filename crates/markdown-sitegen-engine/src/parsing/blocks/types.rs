use serde::Serialize;

/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Default when no other block type matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading {
        /// Number of leading `#` characters (1-6).
        level: u8,
    },
    /// Opened and closed by a ``` fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Every line starts with `N. ` and the numbers start at 1.
    OrderedList,
}

/// A trimmed, blank-line-delimited unit of document text with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
}

impl<'a> Block<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            kind: super::classify(text),
            text,
        }
    }
}
