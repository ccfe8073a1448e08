//! Error types for deconda operations.
//!
//! This module defines [`DecondaError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal conditions (conda environment enumeration failure, missing scan
//!   root) surface as `DecondaError` and abort the run
//! - Per-environment, per-package, and per-file failures are logged where
//!   they occur and never propagate past their unit of work
//! - Use `anyhow::Error` (via `DecondaError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deconda operations.
#[derive(Debug, Error)]
pub enum DecondaError {
    /// A conda invocation failed or could not be spawned.
    #[error("conda command failed with exit code {code:?}: {command}")]
    CondaCommandFailed { command: String, code: Option<i32> },

    /// conda produced output we could not parse as the expected JSON.
    #[error("Failed to parse conda output for '{command}': {message}")]
    CondaParseError { command: String, message: String },

    /// Scan root directory does not exist.
    #[error("Scan root does not exist: {path}")]
    ScanRootNotFound { path: PathBuf },

    /// Failed to write the match table.
    #[error("Failed to write CSV output to {path}: {message}")]
    CsvWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for deconda operations.
pub type Result<T> = std::result::Result<T, DecondaError>;
