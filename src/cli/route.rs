//! CLI route: run context, the list command, and the lease command. Dispatches to the
//! classifier, the lease writer, and presentation.

use crate::classifier::find_resource_providers;
use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation::{render, render_count, summary_line};
use crate::error::ScanError;
use crate::lease::{run_leases, split_groups, LeaseEntry, LeaseReport, LeaseSettings, LeaseSource};
use crate::locator::find_repo_root;
use crate::tree::path::resolve_absolute;
use crate::types::{Mode, OutputFormat};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// What to list and how to show it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListRequest {
    pub mode: Mode,
    pub format: OutputFormat,
    pub count_only: bool,
}

impl ListRequest {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            mode: Mode::from_flag(cli.with_service_groups),
            format: cli.format,
            count_only: cli.count,
        }
    }
}

/// A lease run as given on the command line; dates and durations are checked on execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseRequest {
    pub source: LeaseSource,
    pub reviewer: String,
    pub startdate: Option<String>,
    pub duration: String,
    pub dry_run: bool,
}

impl LeaseRequest {
    pub fn from_command(command: &Commands) -> Result<Self, ScanError> {
        let Commands::Lease {
            input,
            service,
            resource_provider,
            service_groups,
            reviewer,
            startdate,
            duration,
            dry_run,
        } = command;

        let source = match (input, service, resource_provider) {
            (Some(path), _, _) => LeaseSource::InputFile(path.clone()),
            (None, Some(service), Some(rp)) => LeaseSource::Single(LeaseEntry {
                service: service.clone(),
                resource_provider: rp.clone(),
                service_groups: service_groups.as_deref().map(split_groups).unwrap_or_default(),
            }),
            _ => {
                return Err(ScanError::InvalidLease(
                    "Either --input or both --service and --resource-provider are required"
                        .to_string(),
                ))
            }
        };
        Ok(Self {
            source,
            reviewer: reviewer.clone(),
            startdate: startdate.clone(),
            duration: duration.clone(),
            dry_run: *dry_run,
        })
    }
}

/// Runtime context for CLI execution: the resolved repository root.
pub struct RunContext {
    repo_root: PathBuf,
}

impl RunContext {
    /// Use `repo_root` when given, otherwise discover it from the working directory.
    pub fn new(repo_root: Option<PathBuf>) -> Result<Self, ScanError> {
        match repo_root {
            Some(root) => Self::with_root(&root),
            None => Self::discover(None),
        }
    }

    /// Use an explicit root without searching for it.
    pub fn with_root(root: &Path) -> Result<Self, ScanError> {
        let repo_root = resolve_absolute(root)?;
        info!(root = %repo_root.display(), "Using explicit repository root");
        Ok(Self { repo_root })
    }

    /// Discover the root by walking up from `start` (default: working directory).
    pub fn discover(start: Option<&Path>) -> Result<Self, ScanError> {
        let repo_root = find_repo_root(start)?;
        info!(root = %repo_root.display(), "Discovered repository root");
        Ok(Self { repo_root })
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Run the listing and return everything destined for stdout.
    pub fn execute(&self, request: &ListRequest) -> Result<String, ScanError> {
        let providers = find_resource_providers(&self.repo_root, request.mode)?;
        info!(
            count = providers.len(),
            mode = request.mode.preposition(),
            "Resource providers selected"
        );

        if request.count_only {
            return Ok(render_count(&providers));
        }

        let body = render(&providers, request.mode, request.format)?;
        if request.format == OutputFormat::Json {
            return Ok(body);
        }
        Ok(format!(
            "{}\n\n{}",
            body,
            summary_line(providers.len(), request.mode)
        ))
    }
}

impl RunContext {
    /// Validate the lease settings against `today`, then write one lease per entry.
    pub fn generate_leases(
        &self,
        request: &LeaseRequest,
        today: NaiveDate,
    ) -> Result<LeaseReport, ScanError> {
        let settings = LeaseSettings::new(
            &request.reviewer,
            request.startdate.as_deref(),
            &request.duration,
            request.dry_run,
            today,
        )?;
        info!(
            reviewer = %settings.reviewer,
            startdate = %settings.startdate,
            duration = %settings.duration,
            dry_run = settings.dry_run,
            "Generating leases"
        );
        run_leases(&self.repo_root, &request.source, settings)
    }
}
