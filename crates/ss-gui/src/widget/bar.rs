//! Progress widgets: segmented markers and a fill bar.

use macroquad::prelude::*;
use ss_flow::Progress;

use super::Rect2;
use crate::theme::palette;

/// Gap between marker segments.
const SEGMENT_GAP: f32 = 4.0;

/// Draw one segment per item, the current one highlighted.
pub fn draw_markers(progress: &Progress, area: &Rect2) {
    if progress.total == 0 {
        return;
    }
    let gaps = SEGMENT_GAP * (progress.total - 1) as f32;
    let seg_w = ((area.w - gaps) / progress.total as f32).max(1.0);
    for (i, active) in progress.markers().enumerate() {
        let x = area.x + i as f32 * (seg_w + SEGMENT_GAP);
        let color = if active {
            palette::WHITE
        } else {
            palette::DARK_GRAY
        };
        draw_rectangle(x, area.y, seg_w, area.h, color);
    }
}

/// Draw a bar filled to `progress.fraction()`.
pub fn draw_bar(progress: &Progress, area: &Rect2, fill_color: Color) {
    draw_rectangle(area.x, area.y, area.w, area.h, palette::DARK_GRAY);
    let fill_w = area.w * progress.fraction().clamp(0.0, 1.0);
    if fill_w > 0.0 {
        draw_rectangle(area.x, area.y, fill_w, area.h, fill_color);
    }
}
