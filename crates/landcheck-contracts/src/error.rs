//! Error types for the landcheck workspace.
//!
//! Problems with a document's *content* are never errors: they become
//! findings in the verdict. `LandcheckError` covers the surrounding plumbing
//! only: malformed input shapes, configuration, uploads and history.

use thiserror::Error;

/// The unified error type for the landcheck crates.
#[derive(Debug, Error)]
pub enum LandcheckError {
    /// An incoming record does not have the shape of a `DocumentRecord`.
    #[error("malformed document record: {reason}")]
    MalformedRecord { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// An uploaded file was refused before reaching extraction.
    #[error("upload rejected: {reason}")]
    UploadRejected { reason: String },

    /// The document history store could not be read or appended to.
    #[error("history store error: {reason}")]
    HistoryError { reason: String },

    /// Reading an input file failed.
    #[error("i/o error on '{path}': {reason}")]
    Io { path: String, reason: String },
}

/// Convenience alias used throughout the landcheck crates.
pub type LandcheckResult<T> = Result<T, LandcheckError>;
