use std::path::Path;

use crate::{
    io,
    parsing::blocks::{kinds::Heading, split_blocks},
    render::markdown_to_html,
};

use super::{CONTENT_PLACEHOLDER, PageError, SiteError, TITLE_PLACEHOLDER};

/// The text of the first heading block, with its `#` prefix removed.
///
/// Any heading level counts.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    split_blocks(markdown)
        .into_iter()
        .find(|block| Heading::level(block).is_some())
        .map(|block| {
            block
                .trim_start_matches([Heading::MARKER, ' '])
                .to_string()
        })
        .ok_or(PageError::MissingTitle)
}

/// Fills a template's title and content placeholders from a markdown page.
pub fn render_page(markdown: &str, template: &str) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Renders `from` through the template at `template_path` and writes `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = io::read_file(from)?;
    let template = io::read_file(template_path)?;
    let html = render_page(&markdown, &template).map_err(|source| SiteError::Page {
        path: from.to_path_buf(),
        source,
    })?;

    io::write_file(dest, &html)?;
    Ok(())
}
