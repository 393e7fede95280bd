use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Assigns a block string exactly one [`BlockKind`].
///
/// Tests run in precedence order and the first match wins:
/// Heading, Code, Quote, UnorderedList, OrderedList, then Paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }
    if CodeFence::is_fenced(block) {
        return BlockKind::Code;
    }
    if BlockQuote::is_quote(block) {
        return BlockKind::Quote;
    }
    if UnorderedList::is_list(block) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::is_list(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
