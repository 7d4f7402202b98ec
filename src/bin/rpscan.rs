//! rpscan CLI Binary
//!
//! Lists resource providers with or without service groups, and writes lease files.

use clap::Parser;
use rpscan::cli::{
    lease_warnings, render_lease_report, Cli, Commands, LeaseRequest, ListRequest, RunContext,
};
use rpscan::error::ScanError;
use rpscan::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("{}", rpscan::cli::map_error(&e));
        process::exit(1);
    }

    info!("rpscan starting");

    let context = match RunContext::new(cli.repo_root.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving repository root: {}", e);
            eprintln!("{}", rpscan::cli::map_error(&e));
            process::exit(1);
        }
    };

    let result = match &cli.command {
        Some(command) => run_lease(&context, command),
        None => context.execute(&ListRequest::from_cli(&cli)),
    };

    match result {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", rpscan::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Run the lease command; warnings go straight to stderr, the report is returned for stdout
fn run_lease(context: &RunContext, command: &Commands) -> Result<String, ScanError> {
    let request = LeaseRequest::from_command(command)?;
    let today = chrono::Local::now().date_naive();
    let report = context.generate_leases(&request, today)?;
    for warning in lease_warnings(&report) {
        eprintln!("{}", warning);
    }
    Ok(render_lease_report(&report))
}

/// Build logging configuration from CLI flags
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    LoggingConfig::from_flags(
        cli.verbose,
        cli.log_level.as_deref(),
        cli.log_format.as_deref(),
        cli.log_file.clone(),
    )
    .with_color(!cli.no_color)
}
