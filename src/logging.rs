//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs never go to stdout, which
//! carries the listing itself: they are written to stderr or appended to a file.

use crate::error::ScanError;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Whether to install a subscriber at all
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
            color: true,
        }
    }
}

impl LoggingConfig {
    /// Build from CLI flags. Logging stays off unless `--verbose` or `--log-level` is given.
    pub fn from_flags(
        verbose: bool,
        log_level: Option<&str>,
        log_format: Option<&str>,
        log_file: Option<PathBuf>,
    ) -> Self {
        let mut config = LoggingConfig::default();
        if verbose {
            config.enabled = true;
            config.level = "debug".to_string();
        }
        if let Some(level) = log_level {
            config.enabled = true;
            config.level = level.to_string();
        }
        if let Some(format) = log_format {
            config.format = format.to_string();
        }
        config.file = log_file;
        config
    }

    /// Enable or disable ANSI colors on stderr output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Initialize the logging system. Does nothing when logging is disabled.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ScanError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let base_subscriber = Registry::default().with(filter);

    let get_file_writer = |log_file: &PathBuf| -> Result<std::fs::File, ScanError> {
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScanError::Logging(format!("Failed to create log directory: {}", e))
            })?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| {
                ScanError::Logging(format!("Failed to open log file {:?}: {}", log_file, e))
            })
    };

    let result = match (format, &config.file) {
        (LogFormat::Json, Some(path)) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(get_file_writer(path)?),
            )
            .try_init(),
        (LogFormat::Json, None) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (LogFormat::Text, Some(path)) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(get_file_writer(path)?),
            )
            .try_init(),
        (LogFormat::Text, None) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ScanError::Logging(format!("Failed to install subscriber: {}", e)))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ScanError> {
    match config.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {
            EnvFilter::try_new(&config.level).map_err(|e| {
                ScanError::Logging(format!("Invalid log level {}: {}", config.level, e))
            })
        }
        other => Err(ScanError::Logging(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error, or off)",
            other
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Text,
}

fn determine_format(config: &LoggingConfig) -> Result<LogFormat, ScanError> {
    match config.format.as_str() {
        "json" => Ok(LogFormat::Json),
        "text" => Ok(LogFormat::Text),
        other => Err(ScanError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}
