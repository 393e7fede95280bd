/// Unordered list block type: every line starts with `* ` or `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    pub fn is_list(block: &str) -> bool {
        block.split('\n').all(|line| Self::item(line).is_some())
    }

    /// The item text after its marker, or `None` if the line has no marker.
    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }

    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| Self::item(line).unwrap_or(line))
            .collect()
    }
}

/// Ordered list block type: every line starts with `N. ` or is a bare number.
///
/// The numbering check compares the number prefixes as strings: the first
/// must be `"1"`, all must be digit strings, and they must already be in
/// lexicographic order. Ten or more items therefore fail the check once
/// `"10"` follows `"9"`.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";
    pub const FIRST: &'static str = "1";

    /// Splits a line into its number prefix and item text.
    pub fn split_item(line: &str) -> Option<(&str, &str)> {
        line.split_once(Self::SEPARATOR)
    }

    /// The number prefix of a line. A line without the separator is all
    /// prefix.
    pub fn number(line: &str) -> &str {
        Self::split_item(line).map_or(line, |(number, _)| number)
    }

    pub fn is_list(block: &str) -> bool {
        let numbers: Vec<&str> = block.split('\n').map(Self::number).collect();

        numbers.first() == Some(&Self::FIRST)
            && numbers
                .iter()
                .all(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            && numbers.windows(2).all(|pair| pair[0] <= pair[1])
    }

    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| Self::split_item(line).map_or(line, |(_, item)| item))
            .collect()
    }
}
