//! Error types for aka-io

use thiserror::Error;

/// Error types for the aka-io library.
#[derive(Debug, Error)]
pub enum Error {
    /// A hex field did not have the exact number of characters required.
    #[error("{field} must be {expected} hex characters, got {actual}")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A hex field contained characters that are not hex digits.
    #[error("{field} is not valid hex: {reason}")]
    InvalidHex {
        field: String,
        reason: hex::FromHexError,
    },

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML serialization errors.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
