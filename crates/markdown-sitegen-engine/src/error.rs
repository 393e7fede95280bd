use thiserror::Error;

/// Errors raised while compiling a markdown document into an HTML tree.
///
/// Every variant is fatal for the document being compiled: callers get no
/// partial span list and no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    /// A delimiter run (`` ` ``, `**` or `*`) was left unclosed inside a
    /// single run of plain text.
    #[error("Malformed inline syntax: unmatched '{delimiter}' in {text:?}")]
    MalformedInlineSyntax {
        delimiter: &'static str,
        text: String,
    },

    /// A parent node was built without a tag or without children.
    #[error("Invalid node construction: {0}")]
    InvalidNodeConstruction(String),
}
