//! Resource provider classification.
//!
//! Every `Microsoft.*` directory under `specification/<service>/resource-manager`
//! lands in exactly one of three buckets:
//!
//! - grouped: it has at least one service-group subdirectory
//! - ungrouped: no service groups, but `stable` or `preview` directly inside
//! - excluded: neither; reported by no output mode

use crate::error::ScanError;
use crate::locator::SPEC_DIR_NAME;
use crate::tree::path::relative_display;
use crate::tree::walker::{child_dirs, ChildEntry};
use crate::types::{Mode, ResourceProvider};
use std::path::Path;
use tracing::{debug, info};

/// Namespace prefix a candidate directory must carry
pub const PROVIDER_PREFIX: &str = "Microsoft.";

/// Directory under each service that holds the providers
pub const RESOURCE_MANAGER_DIR: &str = "resource-manager";

/// Child directories that never count as service groups
pub const NON_GROUP_DIRS: [&str; 4] = ["stable", "preview", "common-types", "examples"];

/// Children whose presence marks a provider as exposing versions directly
pub const VERSION_DIRS: [&str; 2] = ["stable", "preview"];

/// Three-way partition of all candidates under a root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub grouped: Vec<ResourceProvider>,
    pub ungrouped: Vec<ResourceProvider>,
    pub excluded: Vec<ResourceProvider>,
}

impl Classification {
    /// Consume the partition, keeping the side selected by `mode`, sorted by name.
    pub fn select(self, mode: Mode) -> Vec<ResourceProvider> {
        let mut selected = match mode {
            Mode::WithServiceGroups => self.grouped,
            Mode::WithoutServiceGroups => self.ungrouped,
        };
        sort_by_name(&mut selected);
        selected
    }

    /// Total number of candidates seen
    pub fn candidate_count(&self) -> usize {
        self.grouped.len() + self.ungrouped.len() + self.excluded.len()
    }
}

/// Sort providers by name (ordinal), then by path so equal names keep a stable order.
pub fn sort_by_name(providers: &mut [ResourceProvider]) {
    providers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
}

/// Whether a candidate child directory counts as a service group
pub fn is_service_group_dir(entry: &ChildEntry) -> bool {
    entry.is_dir && !NON_GROUP_DIRS.contains(&entry.name.as_str())
}

/// Whether `stable` or `preview` exists directly inside the provider (of any file type)
pub fn has_version_dirs(provider_dir: &Path) -> bool {
    VERSION_DIRS
        .iter()
        .any(|name| provider_dir.join(name).exists())
}

/// Walk `<root>/specification` and partition every candidate provider.
pub fn classify(root: &Path) -> Result<Classification, ScanError> {
    let spec_dir = root.join(SPEC_DIR_NAME);
    if !spec_dir.exists() {
        return Err(ScanError::SpecDirMissing { path: spec_dir });
    }

    let mut classification = Classification::default();

    for service in child_dirs(&spec_dir)? {
        let resource_manager = service.path.join(RESOURCE_MANAGER_DIR);
        if !resource_manager.exists() {
            continue;
        }
        debug!(service = %service.name, "Scanning service");

        for candidate in child_dirs(&resource_manager)? {
            if !candidate.name.starts_with(PROVIDER_PREFIX) {
                continue;
            }

            let mut groups: Vec<String> = child_dirs(&candidate.path)?
                .into_iter()
                .filter(is_service_group_dir)
                .map(|entry| entry.name)
                .collect();
            groups.sort();

            let mut provider = ResourceProvider {
                name: candidate.name.clone(),
                path: relative_display(&candidate.path, root),
                service: service.name.clone(),
                service_groups: None,
            };

            if !groups.is_empty() {
                provider.service_groups = Some(groups);
                classification.grouped.push(provider);
            } else if has_version_dirs(&candidate.path) {
                classification.ungrouped.push(provider);
            } else {
                debug!(
                    provider = %provider.name,
                    path = %provider.path,
                    "Excluded: no service groups and no stable/preview directory"
                );
                classification.excluded.push(provider);
            }
        }
    }

    info!(
        grouped = classification.grouped.len(),
        ungrouped = classification.ungrouped.len(),
        excluded = classification.excluded.len(),
        "Classification complete"
    );

    Ok(classification)
}

/// Providers under `root` matching `mode`, sorted by name.
pub fn find_resource_providers(
    root: &Path,
    mode: Mode,
) -> Result<Vec<ResourceProvider>, ScanError> {
    Ok(classify(root)?.select(mode))
}
