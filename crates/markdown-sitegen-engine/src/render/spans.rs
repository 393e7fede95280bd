use crate::{
    error::MarkdownError,
    html::{HtmlNode, LeafNode},
    parsing::inline::{TextSpan, parse_inline_spans},
};

/// Maps one inline span to its leaf node.
pub fn text_span_to_html_node(span: TextSpan) -> HtmlNode {
    let leaf = match span {
        TextSpan::Text { text } => LeafNode::text(text),
        TextSpan::Bold { text } => LeafNode::tagged("b", text),
        TextSpan::Italic { text } => LeafNode::tagged("i", text),
        TextSpan::Code { text } => LeafNode::tagged("code", text),
        TextSpan::Link { text, url } => LeafNode::tagged("a", text).with_attribute("href", url),
        TextSpan::Image { alt, url } => LeafNode::tagged("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", alt),
    };
    leaf.into()
}

/// Parses `text` into inline spans and maps each one to a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(parse_inline_spans(text)?
        .into_iter()
        .map(text_span_to_html_node)
        .collect())
}
