//! Persisted session state for StorySwipe.
//!
//! Session flags live in a [`KeyValueStore`] injected into [`SessionState`],
//! so screen logic can be exercised against a [`MemoryStore`] in tests and a
//! [`FileStore`] in the application.

/// Error types used throughout the crate.
pub mod error;
/// Typed session flags.
pub mod session;
/// Key-value store backends.
pub mod store;

/// Re-export error types.
pub use error::{SessionError, SessionResult};
/// Re-export the session and its keys.
pub use session::{SessionState, keys};
/// Re-export store types.
pub use store::{FileStore, KeyValueStore, MemoryStore};
