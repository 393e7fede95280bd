use crate::{
    error::MarkdownError,
    html::{HtmlNode, ParentNode},
    parsing::blocks::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
};

use super::spans::text_to_children;

/// `<h{level}>` holding the text after the `#` prefix.
pub fn heading(block: &str, level: u8) -> Result<ParentNode, MarkdownError> {
    ParentNode::new(
        format!("h{level}"),
        text_to_children(Heading::content(block, level))?,
    )
}

/// `<pre><code>` holding the text between the fences.
pub fn code(block: &str) -> Result<ParentNode, MarkdownError> {
    let code = ParentNode::new("code", text_to_children(CodeFence::content(block))?)?;
    ParentNode::new("pre", vec![code.into()])
}

/// `<blockquote>` holding the quote lines with their `>` markers removed.
pub fn quote(block: &str) -> Result<ParentNode, MarkdownError> {
    ParentNode::new("blockquote", text_to_children(&BlockQuote::content(block))?)
}

/// `<ul>` with one `<li>` per line.
pub fn unordered_list(block: &str) -> Result<ParentNode, MarkdownError> {
    list("ul", UnorderedList::items(block))
}

/// `<ol>` with one `<li>` per line.
pub fn ordered_list(block: &str) -> Result<ParentNode, MarkdownError> {
    list("ol", OrderedList::items(block))
}

/// `<p>` holding the block text, newlines included.
pub fn paragraph(block: &str) -> Result<ParentNode, MarkdownError> {
    ParentNode::new("p", text_to_children(block)?)
}

fn list(tag: &str, items: Vec<&str>) -> Result<ParentNode, MarkdownError> {
    let items = items
        .into_iter()
        .map(|item| ParentNode::new("li", text_to_children(item)?).map(HtmlNode::from))
        .collect::<Result<Vec<_>, _>>()?;
    ParentNode::new(tag, items)
}
