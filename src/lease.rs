//! Lease files
//!
//! A lease records that a resource provider (or one of its service groups) is
//! allowed to change for a limited number of days. Each lease lives at
//! `.github/arm-leases/<service>/<provider>/[<group>/]lease.yaml`.

use crate::error::ScanError;
use crate::tree::path::resolve_absolute;
use chrono::NaiveDate;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const LEASE_BASE_DIR: &str = ".github/arm-leases";
pub const LEASE_FILE_NAME: &str = "lease.yaml";
pub const DEFAULT_DURATION: &str = "P180D";
pub const MAX_DURATION_DAYS: u32 = 180;

/// One provider to lease, optionally split into service groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseEntry {
    pub service: String,
    pub resource_provider: String,
    pub service_groups: Vec<String>,
}

impl LeaseEntry {
    pub fn label(&self) -> String {
        format!("{}/{}", self.service, self.resource_provider)
    }
}

/// Validated settings shared by every entry in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseSettings {
    pub reviewer: String,
    pub startdate: NaiveDate,
    pub duration: String,
    pub dry_run: bool,
}

impl LeaseSettings {
    /// Validate raw flag values. `startdate` defaults to `today` and may not precede it.
    pub fn new(
        reviewer: &str,
        startdate: Option<&str>,
        duration: &str,
        dry_run: bool,
        today: NaiveDate,
    ) -> Result<Self, ScanError> {
        let reviewer = reviewer.trim();
        if reviewer.is_empty() {
            return Err(ScanError::InvalidLease("--reviewer is required".to_string()));
        }
        let startdate = match startdate {
            Some(date) => validate_start_date(date, today)?,
            None => today,
        };
        Ok(Self {
            reviewer: reviewer.to_string(),
            startdate,
            duration: validate_duration(duration)?,
            dry_run,
        })
    }
}

/// What happened to a single lease file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaseOutcome {
    Created(PathBuf),
    /// Dry run: the file and the content it would have received
    Planned { path: PathBuf, content: String },
    AlreadyExists(PathBuf),
}

/// Parse one `service, provider[, [group, ...]]` line.
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_input_line(line: &str) -> Result<Option<LeaseEntry>, ScanError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let invalid = || ScanError::InvalidLease(format!("Skipping invalid line: {}", line));

    let (service, rest) = line.split_once(',').ok_or_else(invalid)?;
    let rest = rest.trim_start();
    let (provider, groups) = match rest.split_once(',') {
        Some((provider, tail)) => {
            let inner = tail
                .trim_start()
                .strip_prefix('[')
                .and_then(|t| t.strip_suffix(']'))
                .ok_or_else(invalid)?;
            if inner.is_empty() || inner.contains(']') {
                return Err(invalid());
            }
            (provider, split_groups(inner))
        }
        None => (rest, Vec::new()),
    };
    if service.is_empty() || provider.is_empty() || provider.contains('[') {
        return Err(invalid());
    }

    Ok(Some(LeaseEntry {
        service: service.trim().to_string(),
        resource_provider: provider.trim().to_string(),
        service_groups: groups,
    }))
}

/// Split a comma-separated group list, dropping empty items.
pub fn split_groups(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate_service_name(service: &str) -> Result<(), ScanError> {
    let valid = !service.is_empty()
        && service
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !valid {
        return Err(ScanError::InvalidLease(format!(
            "Service name must be lowercase alphanumeric: {}",
            service
        )));
    }
    Ok(())
}

/// Every dot-separated part must start with an uppercase letter.
pub fn validate_resource_provider(rp: &str) -> Result<(), ScanError> {
    let valid = rp
        .split('.')
        .all(|part| part.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    if !valid {
        return Err(ScanError::InvalidLease(format!(
            "Resource provider parts must start with capital letter: {}",
            rp
        )));
    }
    Ok(())
}

/// Groups become directory names, so they must be a single plain path component.
pub fn validate_service_group(group: &str) -> Result<(), ScanError> {
    if group == "." || group == ".." || group.contains(['/', '\\']) {
        return Err(ScanError::InvalidLease(format!(
            "Service group must be a plain directory name: {}",
            group
        )));
    }
    Ok(())
}

pub fn validate_start_date(date: &str, today: NaiveDate) -> Result<NaiveDate, ScanError> {
    let shaped = date.len() == 10
        && date.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    let parsed = shaped
        .then(|| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .flatten()
        .ok_or_else(|| {
            ScanError::InvalidLease(format!(
                "Invalid date format: {}. Expected YYYY-MM-DD",
                date
            ))
        })?;
    if parsed < today {
        return Err(ScanError::InvalidLease(format!(
            "Startdate cannot be in the past: {}",
            date
        )));
    }
    Ok(parsed)
}

/// Accept `P#D` in either case and return it uppercased.
pub fn validate_duration(duration: &str) -> Result<String, ScanError> {
    let digits = duration
        .strip_prefix(['P', 'p'])
        .and_then(|d| d.strip_suffix(['D', 'd']))
        .filter(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
        .ok_or_else(|| {
            ScanError::InvalidLease(format!(
                "Invalid duration format: {}. Expected P#D (e.g., P180D)",
                duration
            ))
        })?;
    let in_range = digits
        .parse::<u32>()
        .is_ok_and(|days| (1..=MAX_DURATION_DAYS).contains(&days));
    if !in_range {
        return Err(ScanError::InvalidLease(format!(
            "Duration must be between 1 and {} days. Got: {}",
            MAX_DURATION_DAYS, digits
        )));
    }
    Ok(duration.to_uppercase())
}

pub fn lease_yaml(resource_provider: &str, settings: &LeaseSettings) -> String {
    format!(
        "lease:\n  resource-provider: {}\n  startdate: {}\n  duration-days: {}\n  reviewer: {}\n",
        resource_provider,
        settings.startdate.format("%Y-%m-%d"),
        settings.duration,
        settings.reviewer
    )
}

pub fn lease_path(root: &Path, service: &str, rp: &str, group: Option<&str>) -> PathBuf {
    let mut path = root.join(LEASE_BASE_DIR).join(service).join(rp);
    if let Some(group) = group {
        path.push(group);
    }
    path.join(LEASE_FILE_NAME)
}

/// Write `content` to `path` unless the file already exists.
pub fn write_lease(path: &Path, content: &str, dry_run: bool) -> Result<LeaseOutcome, ScanError> {
    if dry_run {
        return Ok(LeaseOutcome::Planned {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScanError::io(parent, e))?;
    }
    let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!(path = %path.display(), "Lease file already exists");
            return Ok(LeaseOutcome::AlreadyExists(path.to_path_buf()));
        }
        Err(e) => return Err(ScanError::io(path, e)),
    };
    file.write_all(content.as_bytes())
        .map_err(|e| ScanError::io(path, e))?;
    debug!(path = %path.display(), "Lease file created");
    Ok(LeaseOutcome::Created(path.to_path_buf()))
}

/// Validate an entry and write one lease per service group (or one for the provider).
///
/// Stops at the first failing file; files already written for the entry are kept.
pub fn process_entry(
    root: &Path,
    entry: &LeaseEntry,
    settings: &LeaseSettings,
) -> Result<Vec<LeaseOutcome>, ScanError> {
    validate_service_name(&entry.service)?;
    validate_resource_provider(&entry.resource_provider)?;
    for group in &entry.service_groups {
        validate_service_group(group)?;
    }

    let content = lease_yaml(&entry.resource_provider, settings);
    let targets: Vec<Option<&str>> = if entry.service_groups.is_empty() {
        vec![None]
    } else {
        entry.service_groups.iter().map(|g| Some(g.as_str())).collect()
    };

    targets
        .into_iter()
        .map(|group| {
            let path = lease_path(root, &entry.service, &entry.resource_provider, group);
            write_lease(&path, &content, settings.dry_run)
        })
        .collect()
}

/// Where the entries of a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaseSource {
    /// A file with one `service, provider[, [groups]]` line per entry
    InputFile(PathBuf),
    Single(LeaseEntry),
}

/// Per-entry result of a run
#[derive(Debug)]
pub struct EntryReport {
    pub label: String,
    pub result: Result<Vec<LeaseOutcome>, ScanError>,
}

/// Everything a lease run did, in input order
#[derive(Debug)]
pub struct LeaseReport {
    pub repo_root: PathBuf,
    pub settings: LeaseSettings,
    pub entries: Vec<EntryReport>,
    /// Input lines that could not be parsed, as warning messages
    pub skipped_lines: Vec<String>,
}

/// Collect entries from `source`. Unparseable input lines are returned as warnings.
pub fn load_entries(source: &LeaseSource) -> Result<(Vec<LeaseEntry>, Vec<String>), ScanError> {
    let path = match source {
        LeaseSource::Single(entry) => return Ok((vec![entry.clone()], Vec::new())),
        LeaseSource::InputFile(path) => resolve_absolute(path)?,
    };
    if !path.is_file() {
        return Err(ScanError::InvalidLease(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(&path).map_err(|e| ScanError::io(&path, e))?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for line in content.lines() {
        match parse_input_line(line) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(e) => skipped.push(e.to_string()),
        }
    }
    debug!(entries = entries.len(), skipped = skipped.len(), "Lease input parsed");
    Ok((entries, skipped))
}

/// Process every entry from `source`. A failing entry is recorded and the run continues.
pub fn run_leases(
    root: &Path,
    source: &LeaseSource,
    settings: LeaseSettings,
) -> Result<LeaseReport, ScanError> {
    let (entries, skipped_lines) = load_entries(source)?;
    let entries = entries
        .iter()
        .map(|entry| {
            let result = process_entry(root, entry, &settings);
            if let Err(e) = &result {
                warn!(entry = %entry.label(), error = %e, "Lease entry failed");
            }
            EntryReport {
                label: entry.label(),
                result,
            }
        })
        .collect();
    Ok(LeaseReport {
        repo_root: root.to_path_buf(),
        settings,
        entries,
        skipped_lines,
    })
}
