use std::path::Path;

use crate::io;

use super::SiteError;

/// Replaces `dest` with a fresh copy of everything under `src`.
///
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    io::validate_dir(src)?;
    io::remove_dir_if_exists(dest)?;

    let copied = io::copy_dir_recursive(src, dest)?;
    log::info!(
        "Copied {copied} static files from {} to {}",
        src.display(),
        dest.display()
    );
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn replaces_previous_output() {
        let dir = create_test_dir();
        create_test_file(&dir, "static/index.css", "body {}");
        create_test_file(&dir, "static/images/rivendell.png", "png");
        create_test_file(&dir, "public/old.html", "stale");
        let public = dir.path().join("public");

        let copied = copy_static(&dir.path().join("static"), &public).unwrap();

        assert_eq!(copied, 2);
        assert!(public.join("index.css").exists());
        assert!(public.join("images/rivendell.png").exists());
        assert!(!public.join("old.html").exists());
    }

    #[test]
    fn missing_source_leaves_output_alone() {
        let dir = create_test_dir();
        create_test_file(&dir, "public/keep.html", "keep");

        let result = copy_static(&dir.path().join("static"), &dir.path().join("public"));

        assert!(result.is_err());
        assert!(dir.path().join("public/keep.html").exists());
    }
}
