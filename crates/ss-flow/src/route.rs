//! Routes, screen transitions, and the route stack.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::FlowError;

/// A navigable screen, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: welcome screen, or redirect once onboarding is done.
    Onboarding,
    /// `/stories`: the story carousel.
    Stories,
    /// `/chunks`: chunk viewer for the current story.
    Chunks,
    /// `/quiz`: quiz on the current story.
    Quiz,
    /// `/content-detail`: placeholder.
    ContentDetail,
    /// `/actions`: hub of follow-up actions.
    Actions,
    /// `/chatbot`: placeholder.
    Chatbot,
    /// `/full-article`: placeholder.
    FullArticle,
}

impl Route {
    /// Every route.
    pub const ALL: [Route; 8] = [
        Route::Onboarding,
        Route::Stories,
        Route::Chunks,
        Route::Quiz,
        Route::ContentDetail,
        Route::Actions,
        Route::Chatbot,
        Route::FullArticle,
    ];

    /// The route's path.
    pub fn path(self) -> &'static str {
        match self {
            Route::Onboarding => "/",
            Route::Stories => "/stories",
            Route::Chunks => "/chunks",
            Route::Quiz => "/quiz",
            Route::ContentDetail => "/content-detail",
            Route::Actions => "/actions",
            Route::Chatbot => "/chatbot",
            Route::FullArticle => "/full-article",
        }
    }

    /// Parse a path. Accepts a leading `#` and a trailing `/`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim().trim_start_matches('#');
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        let path = if path.is_empty() { "/" } else { path };
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| FlowError::UnknownRoute(s.to_string()))
    }
}

/// Navigation outcome of a screen event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stay on the current screen.
    None,
    /// Open a route on top of the current one.
    Push(Route),
    /// Swap the current route for another.
    Replace(Route),
    /// Return to the previous route.
    Pop,
}

/// Result of opening a screen that has preconditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T> {
    /// Preconditions hold; here is the screen state.
    Ready(T),
    /// Preconditions failed; open this route instead.
    Redirect(Route),
}

impl<T> Entry<T> {
    /// The screen state, if ready.
    pub fn ready(self) -> Option<T> {
        match self {
            Entry::Ready(t) => Some(t),
            Entry::Redirect(_) => None,
        }
    }

    /// Map the ready state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Entry<U> {
        match self {
            Entry::Ready(t) => Entry::Ready(f(t)),
            Entry::Redirect(r) => Entry::Redirect(r),
        }
    }
}

/// Stack of visited routes.
///
/// Never empty: popping the last entry lands on the story browser. Opening a
/// route that is already on the stack unwinds to it instead of stacking a
/// second copy, so loops like stories → chunks → … → stories stay shallow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Start at `route`.
    pub fn new(route: Route) -> Self {
        Self { stack: vec![route] }
    }

    /// The route on top of the stack.
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Stories)
    }

    /// Number of routes on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply a transition. Returns false only for `Transition::None`.
    pub fn apply(&mut self, transition: Transition) -> bool {
        let before = self.current();
        match transition {
            Transition::None => return false,
            Transition::Push(route) => {
                if !self.unwind_to(route) {
                    self.stack.push(route);
                }
            }
            Transition::Replace(route) => {
                self.stack.pop();
                if !self.unwind_to(route) {
                    self.stack.push(route);
                }
            }
            Transition::Pop => {
                self.stack.pop();
                if self.stack.is_empty() {
                    self.stack.push(Route::Stories);
                }
            }
        }
        let after = self.current();
        debug!(from = %before, to = %after, depth = self.stack.len(), "navigate");
        true
    }

    fn unwind_to(&mut self, route: Route) -> bool {
        match self.stack.iter().position(|r| *r == route) {
            Some(pos) => {
                self.stack.truncate(pos + 1);
                true
            }
            None => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Onboarding)
    }
}
