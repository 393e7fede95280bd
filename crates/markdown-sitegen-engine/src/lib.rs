//! Markdown to HTML compilation pipeline for markdown-sitegen.
//!
//! Leaves first:
//! - [`parsing::inline`] turns block text into typed spans
//! - [`parsing::blocks`] splits a document into classified blocks
//! - [`render`] maps blocks and spans into an [`html`] element tree
//! - [`html`] serializes the tree
//!
//! [`site`] and [`io`] wrap the pipeline with page templating, content tree
//! walking and static asset copying.

pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod render;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use parsing::{
    ParsedDoc,
    blocks::{Block, BlockKind, classify, split_blocks},
    inline::{TextSpan, parse_inline_spans},
    parse_document,
};
pub use render::{block_to_html_node, markdown_to_html, markdown_to_html_node};
pub use site::{BuildReport, PageError, SiteError, SitePaths, build_site};
