//! CLI presentation: text and json formatters for classified providers and lease runs.

mod leases;
mod providers;

pub use leases::{lease_warnings, render_lease_report};
pub use providers::{
    empty_message, format_providers_json, format_providers_list, format_providers_table, render,
    render_count, summary_line,
};
