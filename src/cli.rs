//! CLI domain: parse, route, help, output, and presentation only.
//! No classification logic; the route dispatches to the classifier.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    empty_message, format_providers_json, format_providers_list, format_providers_table,
    lease_warnings, render, render_count, render_lease_report, summary_line,
};
pub use route::{LeaseRequest, ListRequest, RunContext};
