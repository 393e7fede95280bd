use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid directory: {0}")]
    InvalidDir(PathBuf),
    #[error("Path cannot be expressed relative to the content root: {0}")]
    InvalidPath(PathBuf),
}

impl IoError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::at(path))
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::at(parent))?;
    }
    fs::write(path, content).map_err(IoError::at(path))
}

/// Scan for markdown files under `root`, returned relative to it and sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::at(dir))?;

    for entry in entries {
        let entry = entry.map_err(IoError::at(dir))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(IoError::at(&path))?;

        if file_type.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if is_linked_dir(&file_type, &path) {
            log::warn!("Skipping symlinked directory {}", path.display());
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(relative_to(root, &path)?);
        }
    }

    Ok(())
}

fn relative_to(root: &Path, path: &Path) -> Result<RelativePathBuf, IoError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| IoError::InvalidPath(path.to_path_buf()))?;
    RelativePathBuf::from_path(relative).map_err(|_| IoError::InvalidPath(path.to_path_buf()))
}

/// Recursively copy every file and directory under `src` into `dest`.
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    validate_dir(src)?;
    fs::create_dir_all(dest).map_err(IoError::at(dest))?;

    let mut copied = 0;
    let entries = fs::read_dir(src).map_err(IoError::at(src))?;
    for entry in entries {
        let entry = entry.map_err(IoError::at(src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(IoError::at(&from))?;

        if file_type.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else if is_linked_dir(&file_type, &from) {
            log::warn!("Skipping symlinked directory {}", from.display());
        } else {
            log::debug!("Copying {} to {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::at(&from))?;
            copied += 1;
        }
    }
    Ok(copied)
}

// Directory symlinks are never followed, so a link cycle cannot recurse
fn is_linked_dir(file_type: &fs::FileType, path: &Path) -> bool {
    file_type.is_symlink() && path.is_dir()
}

/// Delete `dir` and everything in it, if it exists
pub fn remove_dir_if_exists(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(IoError::at(dir))?;
    }
    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir(path.to_path_buf()));
    }

    Ok(())
}

/// Resolve a content-relative path against an output root
pub fn resolve(relative_path: &RelativePath, root: &Path) -> PathBuf {
    relative_path.to_path(root)
}
