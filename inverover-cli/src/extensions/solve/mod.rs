//! Contains functionality used by solve command.

/// Reads algorithm configuration.
pub mod config;
/// Reads weight matrix and writes search result.
pub mod formats;
pub mod interruption;
