//! Portrait swipe GUI for StorySwipe.
//!
//! A macroquad application rendering the story carousel, chunk viewer, quiz,
//! and placeholder pages on a fixed portrait canvas, driven by mouse drags
//! and taps or the keyboard.

/// Shared application state.
pub mod app;
/// Keyboard helpers and pointer tracking.
pub mod input;
/// Screens, one per route.
pub mod screen;
/// Palette, canvas scaling, and text.
pub mod theme;
/// Reusable widgets.
pub mod widget;
