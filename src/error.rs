//! Error types for filelist
//!
//! Provides a unified error type for load and save operations.
//! Lookups on missing values are not errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FileListError
pub type Result<T> = std::result::Result<T, FileListError>;

/// Unified error type for filelist operations
#[derive(Debug, Error)]
pub enum FileListError {
    // -------------------------------------------------------------------------
    // Open / Create Errors
    // -------------------------------------------------------------------------
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Mid-operation Errors
    // -------------------------------------------------------------------------
    #[error("read failed after {bytes} bytes: {source}")]
    Read {
        bytes: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed after {bytes} bytes: {source}")]
    Write {
        bytes: u64,
        #[source]
        source: std::io::Error,
    },
}
