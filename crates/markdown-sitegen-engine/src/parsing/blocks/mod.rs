//! # Block Parsing
//!
//! Two-phase block parsing over whole-document text.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): The document is cut on blank lines into trimmed
//!    block strings. Fragments of one character or less are discarded.
//!
//! 2. **Classification** (`classify`): Each block string gets exactly one
//!    `BlockKind`, tested in the order Heading, Code, Quote, UnorderedList,
//!    OrderedList. Paragraph is the fallback.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence, BlockQuote, lists)
//! - **`split`**: `split_blocks` blank-line splitter
//! - **`classify`**: `classify` precedence dispatch
//!
//! ## Key Invariants
//!
//! - Blocks keep document order
//! - No block is shorter than two characters
//! - Marker stripping removes exact, fixed-length tokens, never character classes

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use split::split_blocks;
pub use types::{Block, BlockKind};
