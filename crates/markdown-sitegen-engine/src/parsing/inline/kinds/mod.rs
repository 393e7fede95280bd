//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern
//! - **`Delimiter`**: paired delimiters for code (`` ` ``), bold (`**`) and italic (`*`)
//!
//! The parser calls these constants; it never hardcodes `![`, `**` or `` ` ``.

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;
