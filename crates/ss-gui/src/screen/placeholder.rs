//! Static pages: actions hub, chatbot, full article, content detail.

use ss_flow::{Placeholder, Transition};

use crate::app::AppState;
use crate::input::{clicked, escape_pressed, option_pressed};
use crate::theme::text::{BODY, HEADING, line_height};
use crate::theme::{CANVAS_H, CANVAS_W, MARGIN, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::button::draw_button;
use crate::widget::label::draw_label;
use crate::widget::text_area::draw_text_area;

use super::{HEADER_H, Screen, draw_header, header_back_area};

const LINK_H: f32 = 36.0;
const LINK_GAP: f32 = 8.0;

/// Placeholder screen state.
pub struct PlaceholderScreen {
    page: Placeholder,
}

impl PlaceholderScreen {
    /// Create a screen for `page`.
    pub fn new(page: Placeholder) -> Self {
        Self { page }
    }

    fn link_areas(&self) -> Vec<Rect2> {
        let count = self.page.links.len();
        let total = count as f32 * (LINK_H + LINK_GAP);
        Rect2::new(MARGIN, CANVAS_H - MARGIN - total, CANVAS_W - MARGIN * 2.0, total)
            .rows(count, LINK_H, LINK_GAP)
    }
}

impl Screen for PlaceholderScreen {
    fn update(&mut self, _app: &mut AppState) -> Transition {
        if escape_pressed() || clicked(&header_back_area()) {
            return self.page.back();
        }
        if let Some(index) = option_pressed() {
            return self.page.follow(index);
        }
        match self.link_areas().iter().position(clicked) {
            Some(index) => self.page.follow(index),
            None => Transition::None,
        }
    }

    fn draw(&self, _app: &AppState) {
        let (mx, my) = mouse_canvas_position();
        draw_header(self.page.header, Some("< Back"), None, (mx, my));

        let top = HEADER_H + MARGIN * 2.0;
        draw_label(self.page.title, MARGIN, top, HEADING, palette::WHITE);
        let body = Rect2::new(
            MARGIN,
            top + line_height(HEADING) + MARGIN,
            CANVAS_W - MARGIN * 2.0,
            120.0,
        );
        draw_text_area(self.page.body, &body, BODY, palette::LIGHT_GRAY);

        for ((label, _), area) in self.page.links.iter().zip(self.link_areas()) {
            draw_button(label, &area, mx, my);
        }
    }
}
