//! Static screens with no behavior beyond links.

use crate::route::{Route, Transition};

/// A non-interactive screen: a heading, a line of text, and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Route this page is mounted at.
    pub route: Route,
    /// Header bar title.
    pub header: &'static str,
    /// Page heading.
    pub title: &'static str,
    /// Body line.
    pub body: &'static str,
    /// Where the header back button goes; `None` pops.
    pub back_to: Option<Route>,
    /// Buttons, in display order.
    pub links: &'static [(&'static str, Route)],
}

const CONTENT_DETAIL: Placeholder = Placeholder {
    route: Route::ContentDetail,
    header: "Content Detail",
    title: "Content Detail Page",
    body: "This page will show the full content of the selected story.",
    back_to: Some(Route::Stories),
    links: &[],
};

const ACTIONS: Placeholder = Placeholder {
    route: Route::Actions,
    header: "Actions",
    title: "What next?",
    body: "Test yourself, ask questions, or read the whole story.",
    back_to: Some(Route::Stories),
    links: &[
        ("Take the Quiz", Route::Quiz),
        ("Chat About It", Route::Chatbot),
        ("Read Full Article", Route::FullArticle),
        ("Content Detail", Route::ContentDetail),
        ("Back to Stories", Route::Stories),
    ],
};

const CHATBOT: Placeholder = Placeholder {
    route: Route::Chatbot,
    header: "Chat",
    title: "Chatbot",
    body: "Ask anything about the story you just read. Coming soon.",
    back_to: None,
    links: &[("Continue", Route::Actions)],
};

const FULL_ARTICLE: Placeholder = Placeholder {
    route: Route::FullArticle,
    header: "Full Article",
    title: "Full Article",
    body: "The complete article will appear here.",
    back_to: None,
    links: &[],
};

impl Placeholder {
    /// The placeholder mounted at `route`, if that route is one.
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::ContentDetail => Some(CONTENT_DETAIL),
            Route::Actions => Some(ACTIONS),
            Route::Chatbot => Some(CHATBOT),
            Route::FullArticle => Some(FULL_ARTICLE),
            Route::Onboarding | Route::Stories | Route::Chunks | Route::Quiz => None,
        }
    }

    /// Header back button.
    pub fn back(&self) -> Transition {
        match self.back_to {
            Some(route) => Transition::Replace(route),
            None => Transition::Pop,
        }
    }

    /// Follow link `index`. Returning to the carousel replaces rather than
    /// stacks.
    pub fn follow(&self, index: usize) -> Transition {
        match self.links.get(index) {
            Some(&(_, Route::Stories)) => Transition::Replace(Route::Stories),
            Some(&(_, route)) => Transition::Push(route),
            None => Transition::None,
        }
    }
}
