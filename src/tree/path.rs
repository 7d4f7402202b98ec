//! Path resolution and display helpers

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf};

/// Resolve a path to an absolute form.
///
/// Canonicalizes with `dunce` (no `\\?\` prefixes on Windows). A path that does
/// not exist yet is made absolute lexically instead.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf, ScanError> {
    match dunce::canonicalize(path) {
        Ok(canonical) => Ok(canonical),
        Err(_) => std::path::absolute(path).map_err(|e| ScanError::io(path, e)),
    }
}

/// Render `path` relative to `root` with `/` separators.
///
/// Falls back to the full path when `path` is not under `root`. Components that
/// are not valid UTF-8 are rendered lossily; the walker never yields such names.
pub fn relative_display(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
