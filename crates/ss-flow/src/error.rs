//! Error types for screen logic.

use ss_session::SessionError;
use thiserror::Error;

/// Result type for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors that can occur while handling a screen event.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Persisting session state failed.
    #[error("{0}")]
    Session(#[from] SessionError),

    /// A quiz option index outside the question's options.
    #[error("invalid option {index}: question has {count} options")]
    InvalidOption {
        /// The rejected index.
        index: usize,
        /// Number of options on the question.
        count: usize,
    },

    /// A path that names no route.
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}
