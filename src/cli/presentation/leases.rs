//! Lease run presentation. Progress goes to stdout, warnings and per-entry errors to stderr.

use crate::lease::{LeaseOutcome, LeaseReport};
use crate::tree::path::relative_display;

/// Settings header, one line per lease file, and the closing count.
pub fn render_lease_report(report: &LeaseReport) -> String {
    let root = &report.repo_root;
    let settings = &report.settings;
    let mut lines = vec![
        format!("Repository root: {}", root.display()),
        format!("Reviewer: {}", settings.reviewer),
        format!("Start date: {}", settings.startdate.format("%Y-%m-%d")),
        format!("Duration: {}", settings.duration),
        String::new(),
    ];

    for outcome in report.entries.iter().filter_map(|e| e.result.as_ref().ok()).flatten() {
        match outcome {
            LeaseOutcome::Created(path) => {
                lines.push(format!("Created: {}", relative_display(path, root)))
            }
            LeaseOutcome::Planned { path, content } => {
                lines.push(format!("[DRY RUN] Would create: {}", relative_display(path, root)));
                lines.push(content.trim_end().to_string());
                lines.push("---".to_string());
            }
            LeaseOutcome::AlreadyExists(_) => {}
        }
    }

    lines.push(String::new());
    lines.push(format!("Processed {} entries", report.entries.len()));
    lines.join("\n")
}

pub fn lease_warnings(report: &LeaseReport) -> Vec<String> {
    let root = &report.repo_root;
    let mut warnings = report.skipped_lines.clone();
    if report.entries.is_empty() {
        warnings.push("Warning: No valid entries found in input file".to_string());
    }
    for entry in &report.entries {
        match &entry.result {
            Ok(outcomes) => warnings.extend(outcomes.iter().filter_map(|o| match o {
                LeaseOutcome::AlreadyExists(path) => Some(format!(
                    "Warning: File already exists, skipping: {}",
                    relative_display(path, root)
                )),
                _ => None,
            })),
            Err(e) => warnings.push(format!("Error processing {}: {}", entry.label, e)),
        }
    }
    warnings
}
