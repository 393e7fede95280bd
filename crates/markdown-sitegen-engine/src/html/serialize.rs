use std::fmt;

use super::{HtmlNode, LeafNode, ParentNode};

impl HtmlNode {
    /// Serializes the tree rooted at this node to an HTML string.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            HtmlNode::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            None => f.write_str(self.value()),
            Some(tag) => write!(
                f,
                "<{tag}{attrs}>{value}</{tag}>",
                attrs = self.attributes(),
                value = self.value()
            ),
        }
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}{}>", self.tag(), self.attributes())?;
        for child in self.children() {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag())
    }
}
