//! Single-level directory listing used by the classifier

use crate::error::ScanError;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// An immediate child of a listed directory
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub path: PathBuf,
    pub name: String,
    /// True when the child is a directory (symlinks are followed)
    pub is_dir: bool,
}

/// List the immediate children of `dir`, sorted by file name for determinism.
///
/// Any enumeration error aborts the listing, including `dir` not being a
/// directory. Children whose names are not valid UTF-8 are skipped.
pub fn child_entries(dir: &Path) -> Result<Vec<ChildEntry>, ScanError> {
    let metadata = std::fs::metadata(dir).map_err(|e| ScanError::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path().to_path_buf();
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %path.display(), "Skipping entry with non UTF-8 name");
            continue;
        };
        entries.push(ChildEntry {
            name: name.to_string(),
            is_dir: path.is_dir(),
            path,
        });
    }
    Ok(entries)
}

/// Immediate child directories of `dir`, sorted by file name
pub fn child_dirs(dir: &Path) -> Result<Vec<ChildEntry>, ScanError> {
    Ok(child_entries(dir)?
        .into_iter()
        .filter(|entry| entry.is_dir)
        .collect())
}
