use crate::story::StoryId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A catalog must contain at least one story.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Two stories in one catalog share an id.
    #[error("duplicate story id: {0}")]
    DuplicateStory(StoryId),

    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path of the catalog file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
