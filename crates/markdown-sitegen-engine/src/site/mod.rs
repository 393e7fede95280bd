//! # Site Generation
//!
//! File-system driver around the markdown compiler.
//!
//! - **`page`**: title extraction and template substitution for one page
//! - **`walk`**: maps a content tree onto output pages
//! - **`assets`**: copies static files into the output directory
//!
//! The compiler itself does no I/O; everything that touches disk lives here
//! or in [`crate::io`].

pub mod assets;
pub mod page;
pub mod walk;

use std::path::{Path, PathBuf};

use crate::{error::MarkdownError, io::IoError};

pub use assets::copy_static;
pub use page::{extract_title, generate_page, render_page};
pub use walk::{generate_pages_recursive, page_destination};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Template used when a site has none of its own.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ Title }}</title>
    <link href="/index.css" rel="stylesheet">
</head>
<body>
    <article>
        {{ Content }}
    </article>
</body>
</html>
"#;

/// Why a single page could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Page requires a heading to use as its title")]
    MissingTitle,
    #[error(transparent)]
    Markdown(#[from] MarkdownError),
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to render {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

/// Where a site's inputs and output live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
}

/// Summary of a finished build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub static_files: usize,
    pub pages: Vec<PathBuf>,
}

/// Rebuilds the output directory: static assets first, then every page.
///
/// A missing static directory is not an error; the output directory is
/// still cleared and recreated.
pub fn build_site(paths: &SitePaths) -> Result<BuildReport, SiteError> {
    let static_files = if paths.static_dir.is_dir() {
        copy_static(&paths.static_dir, &paths.public_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping asset copy",
            paths.static_dir.display()
        );
        reset_dir(&paths.public_dir)?;
        0
    };

    let pages = generate_pages_recursive(&paths.content_dir, &paths.template, &paths.public_dir)?;
    log::info!(
        "Built {} pages and {} static files into {}",
        pages.len(),
        static_files,
        paths.public_dir.display()
    );

    Ok(BuildReport {
        static_files,
        pages,
    })
}

fn reset_dir(dir: &Path) -> Result<(), IoError> {
    crate::io::remove_dir_if_exists(dir)?;
    std::fs::create_dir_all(dir).map_err(|source| IoError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
