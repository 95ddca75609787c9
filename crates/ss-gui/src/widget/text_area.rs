//! Multi-line text with word wrap.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::text::{draw_ui_text, line_height, text_width};

/// Draw word-wrapped text inside `area`, clipping lines that do not fit.
///
/// Returns the height used.
pub fn draw_text_area(text: &str, area: &Rect2, size: u16, color: Color) -> f32 {
    let lines = wrap_text(text, area.w, |s| text_width(s, size));
    let step = line_height(size);
    let visible = ((area.h / step) as usize).min(lines.len());
    for (i, line) in lines.iter().take(visible).enumerate() {
        draw_ui_text(line, area.x, area.y + i as f32 * step, size, color);
    }
    visible as f32 * step
}

/// Word-wrap text into lines no wider than `max_width` as measured by
/// `measure`. A single word wider than the limit gets a line of its own.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
