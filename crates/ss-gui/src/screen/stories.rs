//! Story carousel: drag the card sideways to browse, up to dive in.

use macroquad::prelude::*;
use ss_flow::{StoryBrowser, Transition};

use crate::app::AppState;
use crate::input::{
    DragTracker, PointerEvent, clicked, confirm_pressed, escape_pressed, left_pressed,
    right_pressed, up_pressed,
};
use crate::theme::text::{BODY, HEADING, SMALL, line_height};
use crate::theme::{CANVAS_H, CANVAS_W, MARGIN, cover_color, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::bar::draw_markers;
use crate::widget::label::{draw_label, draw_label_centered};
use crate::widget::panel::draw_panel;
use crate::widget::text_area::draw_text_area;

use super::{HEADER_H, Screen, draw_header, header_back_area};

fn card_area() -> Rect2 {
    Rect2::new(
        MARGIN,
        HEADER_H + MARGIN * 2.0,
        CANVAS_W - MARGIN * 2.0,
        CANVAS_H - HEADER_H - MARGIN * 6.0,
    )
}

/// Story carousel state.
///
/// Besides the upward drag, Up, Enter and Space also dive into the
/// displayed story, so the carousel is usable without a pointer. Left and
/// Right browse.
pub struct StoriesScreen {
    browser: StoryBrowser,
    tracker: DragTracker,
}

impl StoriesScreen {
    /// Create the carousel screen.
    pub fn new(browser: StoryBrowser) -> Self {
        Self {
            browser,
            tracker: DragTracker::new(),
        }
    }

    fn dive(&mut self, app: &mut AppState) -> Transition {
        app.attempt(|s| self.browser.dive(s))
            .unwrap_or(Transition::None)
    }
}

impl Screen for StoriesScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        if escape_pressed() || clicked(&header_back_area()) {
            self.tracker.cancel();
            return self.browser.back();
        }
        if left_pressed() {
            self.browser.previous_story();
        }
        if right_pressed() {
            self.browser.next_story();
        }
        if up_pressed() || confirm_pressed() {
            return self.dive(app);
        }

        let origin = self.tracker.origin();
        match self.tracker.poll() {
            Some(PointerEvent::Drag(drag)) => {
                let started_on_card = origin.is_some_and(|(x, y)| card_area().contains(x, y));
                if started_on_card {
                    app.attempt(|s| self.browser.drag_end(&drag, s))
                        .unwrap_or(Transition::None)
                } else {
                    Transition::None
                }
            }
            Some(PointerEvent::Tap { .. }) | None => Transition::None,
        }
    }

    fn draw(&self, _app: &AppState) {
        let (mx, my) = mouse_canvas_position();
        draw_header("StorySwipe", Some("< Back"), None, (mx, my));

        let markers = Rect2::new(MARGIN, HEADER_H + MARGIN - 2.0, CANVAS_W - MARGIN * 2.0, 3.0);
        draw_markers(&self.browser.progress(), &markers);

        let Some(story) = self.browser.current() else {
            draw_label_centered("No stories", 0.0, CANVAS_H / 2.0, CANVAS_W, BODY, palette::LIGHT_GRAY);
            return;
        };

        // The card follows the pointer while dragging.
        let (dx, dy) = self.tracker.offset().unwrap_or((0.0, 0.0));
        let card = card_area().offset(dx, dy.min(0.0));
        draw_panel(&card);

        let (cover, body) = card.take_top(card.h * 0.45);
        draw_rectangle(cover.x + 1.0, cover.y + 1.0, cover.w - 2.0, cover.h - 1.0, cover_color(story.id.0));
        draw_label(&story.image, cover.x + 6.0, cover.y + cover.h - 16.0, SMALL, palette::WHITE);

        let body = body.inset(MARGIN);
        let used = draw_text_area(&story.title, &body, HEADING, palette::WHITE);
        let (_, description) = body.take_top(used + line_height(BODY) / 2.0);
        draw_text_area(&story.description, &description, BODY, palette::LIGHT_GRAY);

        draw_label_centered(
            "Swipe up to dive in",
            0.0,
            CANVAS_H - MARGIN * 3.0,
            CANVAS_W,
            SMALL,
            palette::LIGHT_GRAY,
        );
        draw_label_centered(
            "< > browse",
            0.0,
            CANVAS_H - MARGIN * 1.8,
            CANVAS_W,
            SMALL,
            palette::DARK_GRAY,
        );
    }
}
