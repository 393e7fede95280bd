use crate::parsing::inline::TextSpan;

/// A paired inline delimiter that wraps a run of text.
///
/// Text between an opening and a closing delimiter becomes one span of the
/// delimiter's kind. Delimiters never nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `` ` ``
    Code,
    /// `**`
    Bold,
    /// `*`
    Italic,
}

impl Delimiter {
    pub const TICK: &'static str = "`";
    pub const DOUBLE_STAR: &'static str = "**";
    pub const STAR: &'static str = "*";

    /// Splitting order. `**` must be consumed before `*`.
    pub const ORDER: [Delimiter; 3] = [Delimiter::Code, Delimiter::Bold, Delimiter::Italic];

    pub fn token(self) -> &'static str {
        match self {
            Delimiter::Code => Self::TICK,
            Delimiter::Bold => Self::DOUBLE_STAR,
            Delimiter::Italic => Self::STAR,
        }
    }

    /// Wraps delimited text in the span kind this delimiter produces.
    pub fn span(self, text: &str) -> TextSpan {
        match self {
            Delimiter::Code => TextSpan::code(text),
            Delimiter::Bold => TextSpan::bold(text),
            Delimiter::Italic => TextSpan::italic(text),
        }
    }
}
