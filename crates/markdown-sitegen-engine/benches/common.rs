// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code` content.\n\n- Bullet point with [a link](https://example.com)\n- Another item\n\n1. First\n2. Second\n\n> Quoted line\n> and another\n\n```fn example() {}```\n\n![diagram](/images/diagram.png)\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(spans: usize) -> String {
    let mut content = String::new();

    for i in 0..spans {
        content.push_str(&format!(
            "Word {i} **strong {i}** then *soft {i}* and `tick {i}` plus [link {i}](/p/{i}) "
        ));
    }

    content
}
