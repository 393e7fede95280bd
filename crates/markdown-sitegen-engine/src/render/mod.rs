//! # Rendering
//!
//! Maps classified blocks into an [`HtmlNode`] tree.
//!
//! Each block kind has its own constructor in `blocks`. A constructor strips
//! the block's markers, runs inline parsing on what is left and wraps the
//! resulting leaves in one or more parent nodes. The document root is always
//! a `<div>`.

pub mod blocks;
pub mod spans;

use crate::{
    error::MarkdownError,
    html::{HtmlNode, ParentNode},
    parsing::{
        blocks::{Block, BlockKind},
        parse_document,
    },
};

pub use spans::text_span_to_html_node;

/// Tag of the root node wrapping every document.
pub const ROOT_TAG: &str = "div";

/// Builds the node for one classified block.
pub fn block_to_html_node(block: &Block<'_>) -> Result<HtmlNode, MarkdownError> {
    let node = match block.kind {
        BlockKind::Heading { level } => blocks::heading(block.text, level)?,
        BlockKind::Code => blocks::code(block.text)?,
        BlockKind::Quote => blocks::quote(block.text)?,
        BlockKind::UnorderedList => blocks::unordered_list(block.text)?,
        BlockKind::OrderedList => blocks::ordered_list(block.text)?,
        BlockKind::Paragraph => blocks::paragraph(block.text)?,
    };
    Ok(node.into())
}

/// Compiles a whole document into a `<div>` holding one node per block.
///
/// # Errors
/// Fails on malformed inline syntax in any block, or with
/// [`MarkdownError::InvalidNodeConstruction`] when the document has no
/// blocks at all.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    let doc = parse_document(markdown);
    log::trace!("compiling {} blocks", doc.blocks.len());

    let children = doc
        .blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParentNode::new(ROOT_TAG, children)?.into())
}

/// Compiles a document and serializes it in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown).map(|node| node.to_html())
}
