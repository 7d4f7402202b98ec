//! Shared fixture builder for integration tests
//!
//! Builds a throwaway specification repository inside a `TempDir`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary repository with a `specification` directory
pub struct SpecRepo {
    dir: TempDir,
}

impl SpecRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("specification")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create `specification/<service>/resource-manager/<provider>` and return its path
    pub fn provider(&self, service: &str, provider: &str) -> PathBuf {
        let dir = self
            .root()
            .join("specification")
            .join(service)
            .join("resource-manager")
            .join(provider);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Provider with the given child directories
    pub fn provider_with(&self, service: &str, provider: &str, children: &[&str]) -> PathBuf {
        let dir = self.provider(service, provider);
        for child in children {
            fs::create_dir_all(dir.join(child)).unwrap();
        }
        dir
    }

    /// The layout used by most scenarios: Storage and KeyVault ungrouped,
    /// Compute grouped, and an empty provider that neither mode reports.
    pub fn standard() -> Self {
        let repo = Self::new();
        repo.provider_with("storage", "Microsoft.Storage", &["stable", "preview"]);
        repo.provider_with("keyvault", "Microsoft.KeyVault", &["stable", "examples"]);
        repo.provider_with(
            "compute",
            "Microsoft.Compute",
            &["ComputeRP", "DiskRP", "common-types"],
        );
        repo.provider_with("empty", "Microsoft.Empty", &[]);
        repo
    }
}
