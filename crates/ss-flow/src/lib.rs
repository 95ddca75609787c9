//! Navigation logic for StorySwipe.
//!
//! Each screen is a plain state machine that takes input events (drags, taps,
//! selections) and returns a [`Transition`]. Session state and content are
//! passed in explicitly, so everything here runs without a window.

/// Story carousel.
pub mod browser;
/// Chunk viewer.
pub mod chunks;
/// Gesture thresholds and tap zones.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Drag and tap classification.
pub mod gesture;
/// Onboarding gate.
pub mod onboarding;
/// Static placeholder pages.
pub mod placeholder;
/// Segmented progress indicator.
pub mod progress;
/// Quiz attempts and results.
pub mod quiz;
/// Routes, transitions, and the route stack.
pub mod route;

/// Re-export the story browser.
pub use browser::StoryBrowser;
/// Re-export the chunk viewer.
pub use chunks::ChunkViewer;
/// Re-export configuration types.
pub use config::{FlowConfig, GestureConfig, TapZones};
/// Re-export error types.
pub use error::{FlowError, FlowResult};
/// Re-export gesture types.
pub use gesture::{Drag, Swipe, TapSide};
/// Re-export the onboarding gate.
pub use onboarding::Welcome;
/// Re-export placeholder pages.
pub use placeholder::Placeholder;
/// Re-export the progress indicator.
pub use progress::Progress;
/// Re-export quiz types.
pub use quiz::{Band, QuizAttempt, QuizResults};
/// Re-export navigation types.
pub use route::{Entry, Navigator, Route, Transition};
