//! Error types for resource provider scanning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, classifying, or rendering resource providers
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(
        "Could not find repository root from {}. Run from within a specification repository or pass --repo-root.",
        start.display()
    )]
    RootNotFound { start: PathBuf },

    #[error("Specification directory not found: {}", path.display())]
    SpecDirMissing { path: PathBuf },

    #[error("Failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("{0}")]
    InvalidLease(String),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"));
        ScanError::Io { path, source }
    }
}
