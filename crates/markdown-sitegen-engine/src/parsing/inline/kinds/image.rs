use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![alt](url)`.
///
/// Both the alt text and the url are matched lazily, so two images on one
/// line are captured separately. Either part may be empty.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }
}
