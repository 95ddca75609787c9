//! Landing screen shown until onboarding is done.

use ss_flow::{Transition, Welcome};

use crate::app::AppState;
use crate::input::{clicked, confirm_pressed, escape_pressed};
use crate::theme::text::{BODY, SMALL};
use crate::theme::{CANVAS_H, CANVAS_W, MARGIN, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::button::draw_button;
use crate::widget::label::draw_label_centered;
use crate::widget::text_area::draw_text_area;

use super::{Screen, draw_heading};

fn start_button() -> Rect2 {
    Rect2::new(MARGIN * 3.0, CANVAS_H - 120.0, CANVAS_W - MARGIN * 6.0, 40.0)
}

/// Welcome screen state.
pub struct WelcomeScreen {
    welcome: Welcome,
}

impl WelcomeScreen {
    /// Create the welcome screen.
    pub fn new(welcome: Welcome) -> Self {
        Self { welcome }
    }
}

impl Screen for WelcomeScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        if escape_pressed() {
            app.should_quit = true;
            return Transition::None;
        }
        if confirm_pressed() || clicked(&start_button()) {
            return app
                .attempt(|s| self.welcome.start(s))
                .unwrap_or(Transition::None);
        }
        Transition::None
    }

    fn draw(&self, _app: &AppState) {
        let (mx, my) = mouse_canvas_position();

        draw_heading(Welcome::TITLE, 150.0, palette::WHITE);
        let tagline = Rect2::new(MARGIN * 2.0, 190.0, CANVAS_W - MARGIN * 4.0, 60.0);
        draw_text_area(Welcome::TAGLINE, &tagline, BODY, palette::LIGHT_GRAY);

        draw_button(Welcome::START_LABEL, &start_button(), mx, my);

        draw_label_centered(
            "Enter: start  |  Esc: quit",
            0.0,
            CANVAS_H - 30.0,
            CANVAS_W,
            SMALL,
            palette::DARK_GRAY,
        );
    }
}
