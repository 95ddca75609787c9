//! Flat panels with a 1px border.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::palette;

/// Draw a panel.
pub fn draw_panel(area: &Rect2) {
    super::bordered_rect(area, palette::SLATE, palette::DARK_GRAY);
}

/// Draw a panel with an accent border.
pub fn draw_panel_accent(area: &Rect2, accent: Color) {
    super::bordered_rect(area, palette::SLATE, accent);
}

/// Draw a panel tinted toward `accent`, for revealed answers.
pub fn draw_panel_tinted(area: &Rect2, accent: Color) {
    let fill = Color::new(
        palette::SLATE.r * 0.6 + accent.r * 0.4,
        palette::SLATE.g * 0.6 + accent.g * 0.4,
        palette::SLATE.b * 0.6 + accent.b * 0.4,
        1.0,
    );
    super::bordered_rect(area, fill, accent);
}
