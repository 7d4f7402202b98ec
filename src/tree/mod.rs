//! Filesystem access
//!
//! Directory listing and path helpers shared by the root locator and classifier.

pub mod path;
pub mod walker;
