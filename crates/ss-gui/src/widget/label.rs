//! Single-line text label widget.

use macroquad::prelude::*;

use crate::theme::text::{draw_ui_text, draw_ui_text_centered, text_width};

/// Draw a label at the given position.
pub fn draw_label(text: &str, x: f32, y: f32, size: u16, color: Color) {
    draw_ui_text(text, x, y, size, color);
}

/// Draw a label centered horizontally within a width.
pub fn draw_label_centered(text: &str, x: f32, y: f32, w: f32, size: u16, color: Color) {
    draw_ui_text_centered(text, x, y, w, size, color);
}

/// Draw a label right-aligned within a width.
pub fn draw_label_right(text: &str, x: f32, y: f32, w: f32, size: u16, color: Color) {
    let rx = x + w - text_width(text, size);
    draw_ui_text(text, rx.max(x), y, size, color);
}
