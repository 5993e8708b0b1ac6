//! Error types for the off-axis projection library
//!
//! This module defines the error types used throughout the library,
//! covering rig configuration and projection geometry validation.

use std::fmt;

/// Result type for off-axis projection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Off-axis projection errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A required collaborator (tracking source, camera) was absent
    /// from the rig configuration
    MissingDependency(String),

    /// Screen or frustum geometry that would put NaN or infinite
    /// entries into the projection matrix
    DegenerateGeometry(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingDependency(msg) => write!(f, "Missing dependency: {}", msg),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
