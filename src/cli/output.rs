//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ScanError;

/// Map any error to the single `Error: <message>` line written to stderr.
pub fn map_error(e: &ScanError) -> String {
    format!("Error: {}", e)
}
