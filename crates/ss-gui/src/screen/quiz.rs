//! Quiz screen: question, four options, feedback, results.

use ss_flow::quiz::OptionState;
use ss_flow::{Band, QuizAttempt, Transition};
use tracing::warn;

use crate::app::AppState;
use crate::input::{clicked, confirm_pressed, escape_pressed, option_pressed, retry_pressed};
use crate::theme::text::{BODY, HEADING, SMALL, line_height};
use crate::theme::{CANVAS_H, CANVAS_W, MARGIN, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::bar::draw_bar;
use crate::widget::button::draw_button;
use crate::widget::label::{draw_label, draw_label_centered, draw_label_right};
use crate::widget::panel::{draw_panel, draw_panel_accent, draw_panel_tinted};
use crate::widget::text_area::draw_text_area;

use super::{HEADER_H, Screen, draw_header, draw_heading, header_back_area};

const OPTION_H: f32 = 40.0;
const OPTION_GAP: f32 = 6.0;
const PROMPT_TOP: f32 = HEADER_H + 44.0;
const PROMPT_H: f32 = 72.0;

fn option_areas(count: usize) -> Vec<Rect2> {
    Rect2::new(MARGIN, PROMPT_TOP + PROMPT_H, CANVAS_W - MARGIN * 2.0, 0.0)
        .rows(count, OPTION_H, OPTION_GAP)
}

fn bottom_button() -> Rect2 {
    Rect2::new(MARGIN, CANVAS_H - MARGIN - 36.0, CANVAS_W - MARGIN * 2.0, 36.0)
}

fn retry_button() -> Rect2 {
    Rect2::new(MARGIN, CANVAS_H - MARGIN * 2.0 - 72.0, CANVAS_W - MARGIN * 2.0, 36.0)
}

/// Quiz screen state.
pub struct QuizScreen {
    attempt: QuizAttempt,
}

impl QuizScreen {
    /// Create the quiz screen.
    pub fn new(attempt: QuizAttempt) -> Self {
        Self { attempt }
    }

    fn select(&mut self, option: usize) {
        if let Err(err) = self.attempt.select(option) {
            warn!(%err, "ignoring selection");
        }
    }

    fn update_question(&mut self) -> Transition {
        if let Some(option) = option_pressed() {
            self.select(option);
        }
        let count = self.attempt.question().map_or(0, |q| q.options.len());
        if let Some(option) = option_areas(count).iter().position(clicked) {
            self.select(option);
        }
        if self.attempt.is_answered() && (confirm_pressed() || clicked(&bottom_button())) {
            self.attempt.advance();
        }
        Transition::None
    }

    fn update_results(&mut self) -> Transition {
        if clicked(&retry_button()) || retry_pressed() {
            self.attempt.retry();
            return Transition::None;
        }
        if clicked(&bottom_button()) || confirm_pressed() {
            return self.attempt.back();
        }
        Transition::None
    }

    fn draw_question(&self, mouse: (f32, f32)) {
        let Some(question) = self.attempt.question() else {
            return;
        };
        let (mx, my) = mouse;

        draw_label(&self.attempt.position_label(), MARGIN, HEADER_H + MARGIN, SMALL, palette::LIGHT_GRAY);
        draw_label_right(
            &format!("Score: {}", self.attempt.score()),
            MARGIN,
            HEADER_H + MARGIN,
            CANVAS_W - MARGIN * 2.0,
            SMALL,
            palette::LIGHT_GRAY,
        );
        let bar = Rect2::new(MARGIN, HEADER_H + MARGIN + line_height(SMALL) + 2.0, CANVAS_W - MARGIN * 2.0, 4.0);
        draw_bar(&self.attempt.progress(), &bar, palette::VIOLET);

        let prompt = Rect2::new(MARGIN, PROMPT_TOP, CANVAS_W - MARGIN * 2.0, PROMPT_H - MARGIN);
        draw_text_area(&question.prompt, &prompt, BODY, palette::WHITE);

        let answered = self.attempt.is_answered();
        for (i, (text, area)) in question
            .options
            .iter()
            .zip(option_areas(question.options.len()))
            .enumerate()
        {
            match self.attempt.option_state(i) {
                OptionState::Correct => draw_panel_tinted(&area, palette::GREEN),
                OptionState::Incorrect => draw_panel_tinted(&area, palette::RED),
                OptionState::Idle if !answered && area.contains(mx, my) => {
                    draw_panel_accent(&area, palette::VIOLET)
                }
                OptionState::Idle => draw_panel(&area),
            }
            let inner = area.inset(8.0);
            let label = format!("{}. {text}", i + 1);
            draw_text_area(&label, &inner, BODY, palette::WHITE);
        }

        if let Some(feedback) = self.attempt.feedback() {
            let (verdict, color) = if feedback.correct {
                ("Correct!", palette::GREEN)
            } else {
                ("Not quite.", palette::RED)
            };
            let detail = match feedback.answer {
                Some(answer) if !feedback.correct => {
                    format!("Answer: {answer}\n{}", feedback.explanation)
                }
                _ => feedback.explanation.to_string(),
            };
            let count = question.options.len() as f32;
            let top = PROMPT_TOP + PROMPT_H + count * (OPTION_H + OPTION_GAP);
            draw_label(verdict, MARGIN, top, BODY, color);
            let explanation = Rect2::new(
                MARGIN,
                top + line_height(BODY),
                CANVAS_W - MARGIN * 2.0,
                bottom_button().y - top - line_height(BODY) - 4.0,
            );
            draw_text_area(&detail, &explanation, SMALL, palette::LIGHT_GRAY);
            draw_button(self.attempt.advance_label(), &bottom_button(), mx, my);
        }
    }

    fn draw_results(&self, mouse: (f32, f32)) {
        let Some(results) = self.attempt.results() else {
            return;
        };
        let (mx, my) = mouse;
        let color = match results.band {
            Band::Excellent => palette::GREEN,
            Band::Good => palette::AMBER,
            Band::KeepLearning => palette::RED,
        };

        draw_heading(results.band.headline(), 120.0, color);
        draw_label_centered(
            &format!("{}%", results.percent),
            0.0,
            170.0,
            CANVAS_W,
            HEADING,
            palette::WHITE,
        );
        let summary = Rect2::new(MARGIN * 2.0, 210.0, CANVAS_W - MARGIN * 4.0, 60.0);
        draw_text_area(&results.summary(), &summary, BODY, palette::LIGHT_GRAY);

        draw_button("Try Again", &retry_button(), mx, my);
        draw_button("Back", &bottom_button(), mx, my);
    }
}

impl Screen for QuizScreen {
    fn update(&mut self, _app: &mut AppState) -> Transition {
        if escape_pressed() || clicked(&header_back_area()) {
            return self.attempt.back();
        }
        if self.attempt.is_finished() {
            self.update_results()
        } else {
            self.update_question()
        }
    }

    fn draw(&self, _app: &AppState) {
        let mouse = mouse_canvas_position();
        let title = format!("Quiz: {}", self.attempt.title());
        draw_header(&title, Some("< Back"), None, mouse);
        if self.attempt.is_finished() {
            self.draw_results(mouse);
        } else {
            self.draw_question(mouse);
        }
    }
}
