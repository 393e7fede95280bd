use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::io;

use super::{SiteError, generate_page};

const INDEX_STEM: &str = "index";
const PAGE_FILE: &str = "index.html";

/// Output location of a content file, relative to the output root.
///
/// `dir/index.md` becomes `dir/index.html`; any other `dir/name.md` becomes
/// `dir/name/index.html`.
pub fn page_destination(source: &RelativePath) -> RelativePathBuf {
    let dir = source
        .parent()
        .map_or_else(RelativePathBuf::new, RelativePath::to_relative_path_buf);

    match source.file_stem() {
        Some(stem) if stem != INDEX_STEM => dir.join(stem).join(PAGE_FILE),
        _ => dir.join(PAGE_FILE),
    }
}

/// Renders every markdown file under `content_dir` into `dest_dir`.
///
/// Returns the written page paths in content order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    let sources = io::scan_markdown_files(content_dir)?;
    let mut pages = Vec::with_capacity(sources.len());

    for source in &sources {
        let from = io::resolve(source, content_dir);
        let dest = io::resolve(&page_destination(source), dest_dir);
        generate_page(&from, template_path, &dest)?;
        pages.push(dest);
    }

    Ok(pages)
}
