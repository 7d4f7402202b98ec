//! CLI parse: clap types for rpscan. No behavior; definitions only.

use crate::cli::help::{AFTER_HELP, LEASE_AFTER_HELP};
use crate::lease::DEFAULT_DURATION;
use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rpscan - classify resource providers by service-group layout
#[derive(Parser, Debug)]
#[command(name = "rpscan")]
#[command(about = "Fetch resource providers with or without service groups")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Repository root (default: auto-detect from the current directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub repo_root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Only output the count
    #[arg(long)]
    pub count: bool,

    /// Show providers with service groups (default: without)
    #[arg(long)]
    pub with_service_groups: bool,

    /// Enable debug logging to stderr (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write lease.yaml files for resource providers
    #[command(after_help = LEASE_AFTER_HELP)]
    #[command(group(clap::ArgGroup::new("source").required(true).args(["input", "service"])))]
    Lease {
        /// File with one `service, provider[, [group, ...]]` line per entry
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Service name (lowercase alphanumeric)
        #[arg(long, requires = "resource_provider")]
        service: Option<String>,

        /// Resource provider name, e.g. Microsoft.Test
        #[arg(long, visible_alias = "rp", requires = "service")]
        resource_provider: Option<String>,

        /// Comma-separated service groups, e.g. DiskRP,ComputeRP
        #[arg(long, visible_alias = "sg", requires = "service")]
        service_groups: Option<String>,

        /// Reviewer name
        #[arg(long)]
        reviewer: String,

        /// Lease start date, YYYY-MM-DD (default: today)
        #[arg(long)]
        startdate: Option<String>,

        /// Lease duration, P#D (max P180D)
        #[arg(long, default_value = DEFAULT_DURATION)]
        duration: String,

        /// Show what would be created without writing files
        #[arg(long)]
        dry_run: bool,
    },
}
