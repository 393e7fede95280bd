use regex::{Captures, Regex};

use crate::error::MarkdownError;

use super::{
    kinds::{Delimiter, Image, Link},
    types::TextSpan,
};

/// Parses the text of one block into a sequence of [`TextSpan`]s.
///
/// Stages run in a fixed order: images, links, then the paired delimiters in
/// [`Delimiter::ORDER`]. Each stage only re-splits plain text.
///
/// # Errors
/// Returns [`MarkdownError::MalformedInlineSyntax`] when a delimiter occurs an
/// odd number of times within one run of plain text.
///
/// # Returns
/// Spans in source order. Empty plain-text spans are dropped; empty links and
/// images are kept.
pub fn parse_inline_spans(text: &str) -> Result<Vec<TextSpan>, MarkdownError> {
    let spans = vec![TextSpan::text(text)];
    let spans = split_images(spans);
    let mut spans = split_links(spans);

    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }

    spans.retain(|span| !(span.is_plain() && span.content().is_empty()));
    Ok(spans)
}

/// Pulls every `![alt](url)` out of the plain-text spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, Image::regex(), |caps| {
        TextSpan::image(&caps[1], &caps[2])
    })
}

/// Pulls every `[text](url)` out of the plain-text spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, Link::regex(), |caps| TextSpan::link(&caps[1], &caps[2]))
}

/// Splits plain-text spans on `delimiter`, alternating plain and delimited
/// spans. A run of plain text always starts and ends the split.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        match span {
            TextSpan::Text { text } => {
                let parts: Vec<&str> = text.split(delimiter.token()).collect();
                if parts.len() % 2 == 0 {
                    return Err(MarkdownError::MalformedInlineSyntax {
                        delimiter: delimiter.token(),
                        text,
                    });
                }
                for (index, part) in parts.into_iter().enumerate() {
                    if index % 2 == 0 {
                        out.push(TextSpan::text(part));
                    } else {
                        out.push(delimiter.span(part));
                    }
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

fn split_pattern(
    spans: Vec<TextSpan>,
    regex: &Regex,
    make: impl Fn(&Captures<'_>) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Text { text } => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut last = 0;
        for caps in regex.captures_iter(&text) {
            let Some(found) = caps.get(0) else { continue };
            out.push(TextSpan::text(&text[last..found.start()]));
            out.push(make(&caps));
            last = found.end();
        }
        out.push(TextSpan::text(&text[last..]));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_a_single_span() {
        let spans = parse_inline_spans("hello world").unwrap();
        assert_eq!(spans, vec![TextSpan::text("hello world")]);
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(parse_inline_spans("").unwrap().is_empty());
    }

    #[test]
    fn empty_plain_edges_are_dropped() {
        assert_eq!(
            parse_inline_spans("**all bold**").unwrap(),
            vec![TextSpan::bold("all bold")]
        );
        assert_eq!(parse_inline_spans("``").unwrap(), vec![TextSpan::code("")]);
    }

    #[test]
    fn split_code_span() {
        let spans = split_delimiter(
            vec![TextSpan::text("This is text with a `code block` word")],
            Delimiter::Code,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::text("This is text with a "),
                TextSpan::code("code block"),
                TextSpan::text(" word"),
            ]
        );
    }

    #[test]
    fn stray_backtick_is_malformed() {
        let err = parse_inline_spans("This is invalid ` markdown").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::MalformedInlineSyntax {
                delimiter: "`",
                text: "This is invalid ` markdown".into(),
            }
        );
    }

    #[test]
    fn unclosed_bold_is_malformed() {
        let err = parse_inline_spans("a **b").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::MalformedInlineSyntax { delimiter: "**", .. }
        ));
    }

    #[test]
    fn unclosed_italic_is_malformed() {
        let err = parse_inline_spans("a *b").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::MalformedInlineSyntax { delimiter: "*", .. }
        ));
    }

    #[test]
    fn split_bold_across_several_spans() {
        let spans = split_delimiter(
            vec![
                TextSpan::text("This is **bold** text"),
                TextSpan::text("Multiple **bold** pieces of text are **bolded**"),
            ],
            Delimiter::Bold,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::text("This is "),
                TextSpan::bold("bold"),
                TextSpan::text(" text"),
                TextSpan::text("Multiple "),
                TextSpan::bold("bold"),
                TextSpan::text(" pieces of text are "),
                TextSpan::bold("bolded"),
                TextSpan::text(""),
            ]
        );
    }

    #[test]
    fn delimiter_split_passes_other_kinds_through() {
        let spans = split_delimiter(
            vec![TextSpan::code("a * b"), TextSpan::text("*c*")],
            Delimiter::Italic,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::code("a * b"),
                TextSpan::text(""),
                TextSpan::italic("c"),
                TextSpan::text(""),
            ]
        );
    }

    #[test]
    fn split_two_images() {
        let spans = split_images(vec![TextSpan::text(
            "This is text with an ![image](https://example.com/a.png) and another ![second image](https://example.com/b.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                TextSpan::text("This is text with an "),
                TextSpan::image("image", "https://example.com/a.png"),
                TextSpan::text(" and another "),
                TextSpan::image("second image", "https://example.com/b.png"),
                TextSpan::text(""),
            ]
        );
    }

    #[test]
    fn split_link_in_middle() {
        let spans = split_links(vec![TextSpan::text(
            "Text with [link](https://www.example.com) in it",
        )]);
        assert_eq!(
            spans,
            vec![
                TextSpan::text("Text with "),
                TextSpan::link("link", "https://www.example.com"),
                TextSpan::text(" in it"),
            ]
        );
    }

    #[test]
    fn image_is_never_read_as_link() {
        let spans = parse_inline_spans("![a](u1)").unwrap();
        assert_eq!(spans, vec![TextSpan::image("a", "u1")]);
    }

    #[test]
    fn image_and_link_side_by_side() {
        let spans = parse_inline_spans("![a](u1)[b](u2)").unwrap();
        assert_eq!(
            spans,
            vec![TextSpan::image("a", "u1"), TextSpan::link("b", "u2")]
        );
    }

    #[test]
    fn empty_image_label_is_kept() {
        let spans = parse_inline_spans("x ![](pic.png)").unwrap();
        assert_eq!(
            spans,
            vec![TextSpan::text("x "), TextSpan::image("", "pic.png")]
        );
    }

    #[test]
    fn delimiters_inside_code_are_not_split_again() {
        let spans = parse_inline_spans("run `a**b` now").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::text("run "),
                TextSpan::code("a**b"),
                TextSpan::text(" now"),
            ]
        );
    }

    #[test]
    fn full_inline_pipeline() {
        let text = "This is **text** with an *italic* word and a `code block` and an ![image](https://example.com/zjjcJKZ.png) and a [link](https://boot.dev)";
        let spans = parse_inline_spans(text).unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::text("This is "),
                TextSpan::bold("text"),
                TextSpan::text(" with an "),
                TextSpan::italic("italic"),
                TextSpan::text(" word and a "),
                TextSpan::code("code block"),
                TextSpan::text(" and an "),
                TextSpan::image("image", "https://example.com/zjjcJKZ.png"),
                TextSpan::text(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }
}
