//! Error types for session persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while persisting session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the backing file failed.
    #[error("session store {}: {source}", path.display())]
    Io {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("failed to encode session value: {0}")]
    Encode(#[from] serde_json::Error),
}
