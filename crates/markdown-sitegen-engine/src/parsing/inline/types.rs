use serde::Serialize;

/// A typed run of inline content within a block.
///
/// Only [`TextSpan::Link`] and [`TextSpan::Image`] carry a url, so a url can
/// never be attached to the wrong kind of span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextSpan {
    /// Plain text with no inline markup.
    Text { text: String },
    /// Text between `**` delimiters.
    Bold { text: String },
    /// Text between `*` delimiters.
    Italic { text: String },
    /// Text between backticks.
    Code { text: String },
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`. The label becomes the image's alt text.
    Image { alt: String, url: String },
}

impl TextSpan {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::Bold { text: text.into() }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::Italic { text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::Code { text: text.into() }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// The visible text of the span (the alt text for images).
    pub fn content(&self) -> &str {
        match self {
            Self::Text { text }
            | Self::Bold { text }
            | Self::Italic { text }
            | Self::Code { text }
            | Self::Link { text, .. } => text,
            Self::Image { alt, .. } => alt,
        }
    }

    /// The target url, present only for links and images.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } | Self::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}
