//! Landing route gate: welcome screen until onboarding is done.

use ss_session::{KeyValueStore, SessionState};
use tracing::info;

use crate::error::FlowResult;
use crate::route::{Entry, Route, Transition};

/// Welcome screen shown before onboarding completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Welcome;

impl Welcome {
    /// Headline text.
    pub const TITLE: &'static str = "Welcome to StorySwipe";
    /// Line under the headline.
    pub const TAGLINE: &'static str = "Bite-sized stories. Swipe to browse, swipe up to dive in.";
    /// Start button label.
    pub const START_LABEL: &'static str = "Get Started";

    /// Open the landing route: the welcome screen, or the story browser once
    /// onboarding is done.
    pub fn enter<S: KeyValueStore>(session: &SessionState<S>) -> Entry<Self> {
        if session.has_started() {
            Entry::Redirect(Route::Stories)
        } else {
            Entry::Ready(Welcome)
        }
    }

    /// Complete onboarding and move to the story browser.
    pub fn start<S: KeyValueStore>(&self, session: &mut SessionState<S>) -> FlowResult<Transition> {
        session.mark_started()?;
        info!("onboarding started");
        Ok(Transition::Replace(Route::Stories))
    }
}
