use std::sync::OnceLock;

use regex::Regex;

/// Link inline type: `[text](url)`.
///
/// The pattern would also match the tail of an image, so link extraction
/// must only run after images have been taken out of the text.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }
}
