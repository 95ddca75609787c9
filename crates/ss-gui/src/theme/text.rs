//! Text drawing with macroquad's built-in font.
//!
//! Positions are top-left corners; the baseline offset is applied here so
//! callers lay text out like any other rectangle.

use macroquad::prelude::*;

/// Body text size.
pub const BODY: u16 = 14;
/// Heading text size.
pub const HEADING: u16 = 22;
/// Small print: hints, counters.
pub const SMALL: u16 = 11;

/// Vertical advance for a line of `size` text.
pub fn line_height(size: u16) -> f32 {
    f32::from(size) * 1.25
}

/// Rendered width of `text` at `size`.
pub fn text_width(text: &str, size: u16) -> f32 {
    measure_text(text, None, size, 1.0).width
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw_ui_text(text: &str, x: f32, y: f32, size: u16, color: Color) {
    draw_text(text, x, y + f32::from(size) * 0.8, f32::from(size), color);
}

/// Draw `text` centered horizontally within `[x, x + w]`.
pub fn draw_ui_text_centered(text: &str, x: f32, y: f32, w: f32, size: u16, color: Color) {
    let cx = x + (w - text_width(text, size)) / 2.0;
    draw_ui_text(text, cx.max(x), y, size, color);
}
