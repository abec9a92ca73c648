//! Error types for the fitcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fitcheck operations.
#[derive(Debug, Error)]
pub enum FitCheckError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wardrobe data written by an unknown schema version.
    #[error("Unsupported wardrobe version {found} (expected {expected})")]
    UnsupportedVersion { found: u64, expected: u32 },

    /// Wardrobe data has the wrong shape.
    #[error("Invalid wardrobe data: {0}")]
    InvalidWardrobe(String),

    /// A user-supplied value is out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reference data or configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Saving or loading a wardrobe file failed.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for fitcheck operations.
pub type Result<T> = std::result::Result<T, FitCheckError>;
