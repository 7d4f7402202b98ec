//! Repository root discovery.
//!
//! Walks upward from a starting directory until it finds one that contains a
//! `specification` directory.

use crate::error::ScanError;
use crate::tree::path::resolve_absolute;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the directory that marks a repository root
pub const SPEC_DIR_NAME: &str = "specification";

/// Number of directories checked: the start plus five ancestors
pub const MAX_SEARCH_STEPS: usize = 6;

/// Find the nearest ancestor of `start` (inclusive) containing a `specification` directory.
///
/// `start` defaults to the current working directory.
pub fn find_repo_root(start: Option<&Path>) -> Result<PathBuf, ScanError> {
    let start = match start {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| ScanError::io(".", e))?,
    };

    let mut current = resolve_absolute(&start)?;
    for _ in 0..MAX_SEARCH_STEPS {
        if current.join(SPEC_DIR_NAME).is_dir() {
            debug!(root = %current.display(), "Found repository root");
            return Ok(current);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    Err(ScanError::RootNotFound { start })
}
