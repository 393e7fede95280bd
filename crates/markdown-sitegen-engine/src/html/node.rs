use crate::error::MarkdownError;

use super::Attributes;

/// An element in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        HtmlNode::Leaf(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        HtmlNode::Parent(node)
    }
}

/// An element with no element children.
///
/// A leaf with no tag stands for bare inline text. The value may be empty
/// (an `<img>` carries everything in its attributes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    /// A leaf that serializes as `value` alone.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// A leaf that serializes as `<tag>value</tag>`.
    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// An element whose content is exclusively other elements.
///
/// Fields are private so that a parent can only exist with a non-empty tag
/// and at least one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// # Errors
    /// [`MarkdownError::InvalidNodeConstruction`] if `tag` is empty or
    /// `children` is empty.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, MarkdownError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(MarkdownError::InvalidNodeConstruction(
                "parent nodes require a tag".to_string(),
            ));
        }
        if children.is_empty() {
            return Err(MarkdownError::InvalidNodeConstruction(format!(
                "<{tag}> requires at least one child"
            )));
        }
        Ok(Self {
            tag,
            children,
            attributes: Attributes::new(),
        })
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
