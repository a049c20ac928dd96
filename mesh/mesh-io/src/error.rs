//! Error types for mesh I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing STL files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid STL content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// The binary facet stream ended early.
    #[error("truncated binary STL: expected {expected} facets, got {got}")]
    TruncatedFacets {
        /// Facet count declared in the header.
        expected: u32,
        /// Facets actually read.
        got: u32,
    },

    /// A vertex coordinate failed to parse in an ASCII file.
    #[error("invalid coordinate: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an invalid-content error.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
