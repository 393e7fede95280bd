//! # Inline Parsing
//!
//! Staged splitting of block text into typed [`TextSpan`]s.
//!
//! ## Stages
//!
//! Each stage consumes the plain-text spans produced by the previous stage and
//! re-splits them. Spans of any other kind pass through untouched.
//!
//! 1. **Images** `![alt](url)`
//! 2. **Links** `[text](url)`
//! 3. **Code** `` `code` ``
//! 4. **Bold** `**bold**`
//! 5. **Italic** `*italic*`
//!
//! Images run before links so that `![a](u)` is never read as a link with a
//! stray `!` in front of it. Bold runs before italic so that a lone `*` left
//! over after stage 4 is always an italic delimiter.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` enum (Text, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`parser`**: `parse_inline_spans()` main entry point with `split_*` stages

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline_spans;
pub use types::TextSpan;
