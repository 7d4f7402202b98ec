//! Resource provider presentation: list, table, json, count, and summary.

use crate::error::ScanError;
use crate::types::{Mode, OutputFormat, ResourceProvider};

const NAME_HEADER: &str = "Resource Provider";
const SERVICE_HEADER: &str = "Service";
const PATH_HEADER: &str = "Path";
const GROUPS_HEADER: &str = "Service Groups";

/// Render providers in the requested format.
///
/// Json always yields an array (possibly `[]`); other formats fall back to a
/// sentence when there is nothing to show.
pub fn render(
    providers: &[ResourceProvider],
    mode: Mode,
    format: OutputFormat,
) -> Result<String, ScanError> {
    if format == OutputFormat::Json {
        return format_providers_json(providers);
    }
    if providers.is_empty() {
        return Ok(empty_message(mode));
    }
    Ok(match format {
        OutputFormat::Table => format_providers_table(providers, mode),
        _ => format_providers_list(providers, mode),
    })
}

pub fn render_count(providers: &[ResourceProvider]) -> String {
    providers.len().to_string()
}

pub fn empty_message(mode: Mode) -> String {
    format!(
        "No resource providers {} service groups found.",
        mode.preposition()
    )
}

pub fn summary_line(count: usize, mode: Mode) -> String {
    format!(
        "Total: {} resource provider(s) {} service groups",
        count,
        mode.preposition()
    )
}

pub fn format_providers_json(providers: &[ResourceProvider]) -> Result<String, ScanError> {
    Ok(serde_json::to_string_pretty(providers)?)
}

pub fn format_providers_list(providers: &[ResourceProvider], mode: Mode) -> String {
    providers
        .iter()
        .map(|rp| match mode {
            Mode::WithServiceGroups => format!("{}: [{}]", rp.name, joined_groups(rp)),
            Mode::WithoutServiceGroups => rp.name.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fixed-width table. Every column, the last included, is as wide as its longest
/// cell or header, and the separator under it uses exactly that many dashes.
pub fn format_providers_table(providers: &[ResourceProvider], mode: Mode) -> String {
    let name_width = column_width(NAME_HEADER, providers.iter().map(|rp| rp.name.as_str()));

    let (header, separator, rows): (String, String, Vec<String>) = match mode {
        Mode::WithServiceGroups => {
            let groups: Vec<String> = providers.iter().map(joined_groups).collect();
            let groups_width = column_width(GROUPS_HEADER, groups.iter().map(String::as_str));
            let rows = providers
                .iter()
                .zip(&groups)
                .map(|(rp, g)| format!("{:<name_width$}  {}", rp.name, g))
                .collect();
            (
                format!("{:<name_width$}  {}", NAME_HEADER, GROUPS_HEADER),
                format!("{}  {}", "-".repeat(name_width), "-".repeat(groups_width)),
                rows,
            )
        }
        Mode::WithoutServiceGroups => {
            let service_width =
                column_width(SERVICE_HEADER, providers.iter().map(|rp| rp.service.as_str()));
            let path_width = column_width(PATH_HEADER, providers.iter().map(|rp| rp.path.as_str()));
            let rows = providers
                .iter()
                .map(|rp| {
                    format!(
                        "{:<name_width$}  {:<service_width$}  {}",
                        rp.name, rp.service, rp.path
                    )
                })
                .collect();
            (
                format!(
                    "{:<name_width$}  {:<service_width$}  {}",
                    NAME_HEADER, SERVICE_HEADER, PATH_HEADER
                ),
                format!(
                    "{}  {}  {}",
                    "-".repeat(name_width),
                    "-".repeat(service_width),
                    "-".repeat(path_width)
                ),
                rows,
            )
        }
    };

    let mut lines = vec![header, separator];
    lines.extend(rows);
    lines.join("\n")
}

fn joined_groups(rp: &ResourceProvider) -> String {
    rp.service_groups
        .as_deref()
        .map(|groups| groups.join(", "))
        .unwrap_or_default()
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}
