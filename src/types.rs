//! Core types: classified resource providers, selection mode, and output format.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A classified `Microsoft.*` directory found under `specification/<service>/resource-manager`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceProvider {
    /// Directory base name, e.g. `Microsoft.Storage`
    pub name: String,
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    /// Service directory the provider was found in
    pub service: String,
    /// Sorted service-group directory names; only set for grouped providers
    #[serde(
        rename = "serviceGroups",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_groups: Option<Vec<String>>,
}

/// Which side of the classification to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Providers exposing `stable`/`preview` directly
    #[default]
    WithoutServiceGroups,
    /// Providers that nest versions under service-group directories
    WithServiceGroups,
}

impl Mode {
    /// Map the `--with-service-groups` flag to a mode
    pub fn from_flag(with_service_groups: bool) -> Self {
        if with_service_groups {
            Mode::WithServiceGroups
        } else {
            Mode::WithoutServiceGroups
        }
    }

    /// "with" or "without", as used in human-readable messages
    pub fn preposition(self) -> &'static str {
        match self {
            Mode::WithServiceGroups => "with",
            Mode::WithoutServiceGroups => "without",
        }
    }
}

/// Shape of the rendered listing, selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    List,
    Json,
    Table,
}
