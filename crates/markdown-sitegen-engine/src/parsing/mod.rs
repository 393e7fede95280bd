pub mod blocks;
pub mod inline;

use blocks::{Block, split_blocks};

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

/// Splits and classifies a whole document. Inline content is left unparsed.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    ParsedDoc {
        blocks: split_blocks(markdown).into_iter().map(Block::new).collect(),
    }
}
