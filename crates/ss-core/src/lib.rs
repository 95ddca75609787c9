//! Content model for StorySwipe: stories, derived chunks, and quiz questions.
//!
//! This crate owns only data and knows nothing about sessions or
//! rendering; the navigation crate consumes it through the
//! [`ContentProvider`] trait so tests can swap in fixture catalogs.

/// Catalogs and the content-provider capability.
pub mod catalog;
/// Chunks derived from a story for the sequential viewer.
pub mod chunk;
/// Error types used throughout the crate.
pub mod error;
/// Multiple-choice quiz questions derived from a story.
pub mod quiz;
/// Story records and identifiers.
pub mod story;

/// Re-export catalog types.
pub use catalog::{Catalog, ContentProvider};
/// Re-export chunk types.
pub use chunk::{CHUNKS_PER_STORY, Chunk, derive_chunks};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export quiz content types.
pub use quiz::{OPTIONS_PER_QUESTION, QuizQuestion, derive_questions};
/// Re-export story types.
pub use story::{Story, StoryId};
