//! Screen management: trait definition, route-to-screen mapping, and the
//! shared header.

pub mod chunks;
pub mod placeholder;
pub mod quiz;
pub mod stories;
pub mod welcome;

use ss_flow::{
    ChunkViewer, Entry, Placeholder, QuizAttempt, Route, StoryBrowser, Transition, Welcome,
};
use tracing::{debug, error};

use crate::app::AppState;
use crate::theme::text::{BODY, HEADING, line_height};
use crate::theme::{CANVAS_W, MARGIN, palette};
use crate::widget::Rect2;
use crate::widget::button::draw_link;
use crate::widget::label::draw_label_centered;

use chunks::ChunksScreen;
use placeholder::PlaceholderScreen;
use quiz::QuizScreen;
use stories::StoriesScreen;
use welcome::WelcomeScreen;

/// Trait that all screens implement.
pub trait Screen {
    /// Update state based on input. Returns a transition if the screen should change.
    fn update(&mut self, app: &mut AppState) -> Transition;
    /// Draw the screen.
    fn draw(&self, app: &AppState);
}

/// Build the screen for `route`, following entry redirects.
///
/// Returns the route actually opened alongside its screen; the caller
/// replaces the navigator's top entry when the two differ.
pub fn open(route: Route, app: &mut AppState) -> (Route, Box<dyn Screen>) {
    let mut route = route;
    for _ in 0..Route::ALL.len() {
        match build(route, app) {
            Some(Entry::Ready(screen)) => return (route, screen),
            Some(Entry::Redirect(next)) => {
                debug!(from = %route, to = %next, "entry redirect");
                route = next;
            }
            None => break,
        }
    }
    error!(%route, "could not open route, showing welcome");
    (Route::Onboarding, Box::new(WelcomeScreen::new(Welcome)))
}

fn build(route: Route, app: &mut AppState) -> Option<Entry<Box<dyn Screen>>> {
    let entry = match route {
        Route::Onboarding => Welcome::enter(&app.session).map(|w| boxed(WelcomeScreen::new(w))),
        Route::Stories => {
            let (catalog, config, mut runner) = app.parts();
            let browser = runner.attempt(|s| StoryBrowser::enter(catalog, s, config.gesture))?;
            Entry::Ready(boxed(StoriesScreen::new(browser)))
        }
        Route::Chunks => ChunkViewer::enter(app.catalog.as_ref(), &app.session, app.config.tap_zones)
            .map(|v| boxed(ChunksScreen::new(v))),
        Route::Quiz => QuizAttempt::enter(app.catalog.as_ref(), &app.session)
            .map(|q| boxed(QuizScreen::new(q))),
        Route::ContentDetail | Route::Actions | Route::Chatbot | Route::FullArticle => {
            let page = Placeholder::for_route(route)?;
            Entry::Ready(boxed(PlaceholderScreen::new(page)))
        }
    };
    Some(entry)
}

fn boxed<S: Screen + 'static>(screen: S) -> Box<dyn Screen> {
    Box::new(screen)
}

/// Height of the header strip.
pub const HEADER_H: f32 = 36.0;

/// Rect of the header's left action.
pub fn header_back_area() -> Rect2 {
    Rect2::new(0.0, 0.0, 64.0, HEADER_H)
}

/// Rect of the header's right action.
pub fn header_action_area() -> Rect2 {
    Rect2::new(CANVAS_W - 48.0, 0.0, 48.0, HEADER_H)
}

/// Draw the header strip: optional left action, centered title, optional
/// right action.
pub fn draw_header(title: &str, back: Option<&str>, action: Option<&str>, mouse: (f32, f32)) {
    let (mx, my) = mouse;
    macroquad::prelude::draw_rectangle(0.0, 0.0, CANVAS_W, HEADER_H, palette::SLATE);
    crate::widget::draw_separator(0.0, HEADER_H - 1.0, CANVAS_W);
    let ty = (HEADER_H - line_height(BODY)) / 2.0;
    draw_label_centered(title, MARGIN, ty, CANVAS_W - MARGIN * 2.0, BODY, palette::WHITE);
    if let Some(label) = back {
        draw_link(label, &header_back_area(), mx, my);
    }
    if let Some(label) = action {
        draw_link(label, &header_action_area(), mx, my);
    }
}

/// Draw a heading centered across the canvas.
pub fn draw_heading(text: &str, y: f32, color: macroquad::prelude::Color) {
    draw_label_centered(text, MARGIN, y, CANVAS_W - MARGIN * 2.0, HEADING, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Session;
    use ss_core::{Catalog, ContentProvider};
    use ss_flow::FlowConfig;
    use ss_session::{MemoryStore, SessionState};

    fn app() -> AppState {
        let session: Session = SessionState::new(Box::new(MemoryStore::new()));
        AppState::new(Box::new(Catalog::builtin()), session, FlowConfig::default())
    }

    #[test]
    fn landing_shows_welcome_until_started() {
        let mut app = app();
        assert_eq!(open(Route::Onboarding, &mut app).0, Route::Onboarding);
        app.session.mark_started().unwrap();
        assert_eq!(open(Route::Onboarding, &mut app).0, Route::Stories);
    }

    #[test]
    fn chunks_without_story_redirects() {
        let mut app = app();
        assert_eq!(open(Route::Chunks, &mut app).0, Route::Stories);
        assert_eq!(open(Route::Quiz, &mut app).0, Route::Stories);
    }

    #[test]
    fn chunks_open_with_current_story() {
        let mut app = app();
        let story = app.catalog.stories()[0].clone();
        app.session.set_current_story(&story).unwrap();
        assert_eq!(open(Route::Chunks, &mut app).0, Route::Chunks);
        assert_eq!(open(Route::Quiz, &mut app).0, Route::Quiz);
    }

    #[test]
    fn every_route_opens_something() {
        let mut app = app();
        for route in Route::ALL {
            let (opened, _) = open(route, &mut app);
            assert!(Route::ALL.contains(&opened));
        }
    }
}
