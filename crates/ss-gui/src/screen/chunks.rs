//! Chunk viewer: tap the right of the screen to read on, the left to go back.

use ss_flow::{ChunkViewer, Transition};

use crate::app::AppState;
use crate::input::{
    DragTracker, PointerEvent, clicked, confirm_pressed, escape_pressed, left_pressed,
    right_pressed,
};
use crate::theme::text::{BODY, HEADING, SMALL, line_height};
use crate::theme::{CANVAS_H, CANVAS_W, MARGIN, cover_color, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::bar::draw_markers;
use crate::widget::label::{draw_label, draw_label_right};
use crate::widget::text_area::draw_text_area;

use super::{HEADER_H, Screen, draw_header, header_action_area};

/// Area that takes taps: everything below the header.
fn tap_area() -> Rect2 {
    Rect2::new(0.0, HEADER_H, CANVAS_W, CANVAS_H - HEADER_H)
}

/// Chunk viewer state.
pub struct ChunksScreen {
    viewer: ChunkViewer,
    tracker: DragTracker,
}

impl ChunksScreen {
    /// Create the viewer screen.
    pub fn new(viewer: ChunkViewer) -> Self {
        Self {
            viewer,
            tracker: DragTracker::new(),
        }
    }
}

impl Screen for ChunksScreen {
    fn update(&mut self, _app: &mut AppState) -> Transition {
        if escape_pressed() || clicked(&header_action_area()) {
            self.tracker.cancel();
            return self.viewer.close();
        }
        if left_pressed() {
            return self.viewer.back();
        }
        if right_pressed() || confirm_pressed() {
            return self.viewer.advance();
        }

        match self.tracker.poll() {
            Some(PointerEvent::Tap { x, y }) if tap_area().contains(x, y) => {
                let area = tap_area();
                self.viewer.tap(x - area.x, area.w)
            }
            _ => Transition::None,
        }
    }

    fn draw(&self, _app: &AppState) {
        let (mx, my) = mouse_canvas_position();
        draw_header(&self.viewer.story().title, None, Some("X"), (mx, my));

        let top = HEADER_H + MARGIN;
        let markers = Rect2::new(MARGIN, top, CANVAS_W - MARGIN * 2.0, 3.0);
        draw_markers(&self.viewer.progress(), &markers);

        let chunk = self.viewer.current();
        let strip = Rect2::new(MARGIN, top + MARGIN, CANVAS_W - MARGIN * 2.0, 6.0);
        macroquad::prelude::draw_rectangle(
            strip.x,
            strip.y,
            strip.w,
            strip.h,
            cover_color(self.viewer.story().id.0),
        );

        let label_y = strip.y + strip.h + MARGIN;
        draw_label(&self.viewer.position_label(), MARGIN, label_y, SMALL, palette::LIGHT_GRAY);

        let text_top = label_y + line_height(SMALL) + MARGIN / 2.0;
        let heading = Rect2::new(MARGIN, text_top, CANVAS_W - MARGIN * 2.0, line_height(HEADING) * 2.0);
        let used = draw_text_area(&chunk.title, &heading, HEADING, palette::WHITE);

        let body_top = text_top + used + MARGIN;
        let body = Rect2::new(
            MARGIN,
            body_top,
            CANVAS_W - MARGIN * 2.0,
            CANVAS_H - body_top - MARGIN * 4.0,
        );
        draw_text_area(&chunk.content, &body, BODY, palette::LIGHT_GRAY);

        let hint_y = CANVAS_H - MARGIN * 2.5;
        if let Some(hint) = self.viewer.back_hint() {
            draw_label(hint, MARGIN, hint_y, SMALL, palette::DARK_GRAY);
        }
        draw_label_right(
            self.viewer.advance_hint(),
            MARGIN,
            hint_y,
            CANVAS_W - MARGIN * 2.0,
            SMALL,
            palette::LIGHT_GRAY,
        );
    }
}
