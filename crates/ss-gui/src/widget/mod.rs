//! Flat widget toolkit for the GUI.
//!
//! Provides reusable UI components: panels, labels, buttons, progress
//! markers, and wrapped text.

pub mod bar;
pub mod button;
pub mod label;
pub mod panel;
pub mod text_area;

use macroquad::prelude::*;

use crate::theme::palette;

/// Draw a 1-pixel bordered rectangle (border inside bounds).
pub fn bordered_rect(area: &Rect2, fill: Color, border: Color) {
    draw_rectangle(area.x, area.y, area.w, area.h, fill);
    draw_rectangle_lines(area.x, area.y, area.w, area.h, 1.0, border);
}

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Inset the rect by a margin on all sides.
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: (self.w - margin * 2.0).max(0.0),
            h: (self.h - margin * 2.0).max(0.0),
        }
    }

    /// The same rect moved by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Take a fixed height from the top, return (top_strip, remainder).
    pub fn take_top(&self, height: f32) -> (Self, Self) {
        let h = height.min(self.h);
        (
            Self::new(self.x, self.y, self.w, h),
            Self::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Take a fixed height from the bottom, return (remainder, bottom_strip).
    pub fn take_bottom(&self, height: f32) -> (Self, Self) {
        let h = height.min(self.h);
        (
            Self::new(self.x, self.y, self.w, self.h - h),
            Self::new(self.x, self.y + self.h - h, self.w, h),
        )
    }

    /// Stack `count` rows of `height` separated by `gap`, from the top.
    pub fn rows(&self, count: usize, height: f32, gap: f32) -> Vec<Self> {
        (0..count)
            .map(|i| Self::new(self.x, self.y + i as f32 * (height + gap), self.w, height))
            .collect()
    }
}

/// Horizontal separator line.
pub fn draw_separator(x: f32, y: f32, w: f32) {
    draw_rectangle(x, y, w, 1.0, palette::DARK_GRAY);
}
