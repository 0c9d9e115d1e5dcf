//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{GlueError, GlueResult};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> GlueResult<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(|e| GlueError::write_failure(path, e))?;
    }
    Ok(())
}

/// Write a string to a file, truncating it and creating parent directories.
///
/// Any failure is reported against `path`, including one creating a parent.
pub fn write_string(path: &Path, contents: &str) -> GlueResult<()> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    };

    write().map_err(|e| GlueError::write_failure(path, e))
}

/// Read a file if it exists.
pub fn read_if_exists(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            if path.exists() {
                tracing::warn!("failed to read {}: {}", path.display(), e);
            }
            None
        }
    }
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn rooted(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
