//! Clickable button widget with hover state.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::palette;
use crate::theme::text::{BODY, draw_ui_text_centered, line_height};

/// Draw a button, highlighted while the mouse is over it.
///
/// Clicks are detected in `update` with [`crate::input::clicked`] on the
/// same rect.
pub fn draw_button(label: &str, area: &Rect2, mouse_x: f32, mouse_y: f32) {
    let (fill, text_color) = if area.contains(mouse_x, mouse_y) {
        (palette::VIOLET, palette::WHITE)
    } else {
        (palette::SLATE, palette::LIGHT_GRAY)
    };
    super::bordered_rect(area, fill, palette::VIOLET);
    let ty = area.y + (area.h - line_height(BODY)) / 2.0;
    draw_ui_text_centered(label, area.x, ty, area.w, BODY, text_color);
}

/// Draw a borderless text button, used for header actions.
pub fn draw_link(label: &str, area: &Rect2, mouse_x: f32, mouse_y: f32) {
    let color = if area.contains(mouse_x, mouse_y) {
        palette::WHITE
    } else {
        palette::LIGHT_GRAY
    };
    let ty = area.y + (area.h - line_height(BODY)) / 2.0;
    draw_ui_text_centered(label, area.x, ty, area.w, BODY, color);
}
