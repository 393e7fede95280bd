//! # HTML Element Tree
//!
//! A minimal element tree with two node variants and a serialization
//! contract.
//!
//! - **Leaf**: optional tag, text value, attributes. A leaf without a tag
//!   serializes as its bare text.
//! - **Parent**: required tag, at least one child, attributes.
//!
//! Parents own their children outright, so trees have no sharing and no
//! cycles. Text and attribute values are written verbatim; nothing is
//! escaped.

pub mod attributes;
pub mod node;
pub mod serialize;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};
