//! File discovery, reading and atomic writing

use crate::error::{IndexError, Result};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Extension a post file must carry
pub const MARKDOWN_EXTENSION: &str = "md";

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|s| s == MARKDOWN_EXTENSION)
        .unwrap_or(false)
}

/// List markdown files directly inside `dir`, sorted by file name
///
/// Subdirectories are not descended into. Symlinked posts are followed.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IndexError::path_resolution(format!(
            "posts directory not found: {}",
            dir.display()
        )));
    }

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            IndexError::path_resolution(format!("Error traversing directory: {}", e))
        })?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            debug!("Found post: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| IndexError::read_file(path, e))
}

/// Replace `path` with `content` via a temp file in the same directory
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;

    temp_file.persist(path).map_err(|e| IndexError::Io(e.error))?;
    Ok(())
}
