//! Error types for hoopdata operations.
//!
//! This module defines [`HoopdataError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `HoopdataError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `HoopdataError::Other`) for unexpected errors
//! - A candidate file whose size cannot be read is NOT an error: it is
//!   downgraded to an invalid classification with a reason string and the
//!   run continues

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hoopdata operations.
#[derive(Debug, Error)]
pub enum HoopdataError {
    /// The data directory could not be created.
    #[error("Failed to create data directory {path}: {source}")]
    DataDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data directory could not be enumerated.
    #[error("Failed to read data directory {path}: {source}")]
    DataDirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hoopdata operations.
pub type Result<T> = std::result::Result<T, HoopdataError>;
