//! rpscan: resource provider classification for specification repositories
//!
//! Locates a repository root by its `specification` directory, classifies every
//! `Microsoft.*` resource provider by whether it nests versions under service-group
//! directories, and renders the result as a list, table, or json.

pub mod classifier;
pub mod cli;
pub mod error;
pub mod lease;
pub mod locator;
pub mod logging;
pub mod tree;
pub mod types;
