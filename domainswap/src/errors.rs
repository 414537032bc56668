//! Error types for swap runs.
//!
//! A run has two failure classes. Per-file read problems are recovered and
//! reported as outcomes, never as errors. Everything else (a write that
//! fails, a malformed glob, a bad config file) ends the run and is
//! returned as a [`SwapError`] for the caller to print.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for swap operations
pub type SwapResult<T> = Result<T, SwapError>;

/// Errors that can abort a swap run.
///
/// Read failures on individual files are not errors: they are classified as
/// a [`FileOutcome`](crate::replace::FileOutcome) and the run continues.
/// Only writes, configuration and pattern problems surface here.
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

impl SwapError {
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_glob(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidGlob {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
