//! Chunk viewer: five full-screen chunks of one story, tap to step.

use ss_core::{Chunk, ContentProvider, Story};
use ss_session::{KeyValueStore, SessionState};
use tracing::debug;

use crate::config::TapZones;
use crate::gesture::{TapSide, classify_tap};
use crate::progress::Progress;
use crate::route::{Entry, Route, Transition};

/// Where the last chunk leads.
const FINISH_ROUTE: Route = Route::Chatbot;

/// Chunk viewer state.
#[derive(Debug, Clone)]
pub struct ChunkViewer {
    story: Story,
    chunks: Vec<Chunk>,
    index: usize,
    zones: TapZones,
}

impl ChunkViewer {
    /// Open the viewer on the session's current story.
    ///
    /// Without a current story there is nothing to show, so the entry
    /// redirects to the story browser.
    pub fn enter<P, S>(provider: &P, session: &SessionState<S>, zones: TapZones) -> Entry<Self>
    where
        P: ContentProvider + ?Sized,
        S: KeyValueStore,
    {
        let Some(story) = session.current_story() else {
            debug!("no current story, redirecting");
            return Entry::Redirect(Route::Stories);
        };
        let chunks = provider.chunks_for(&story);
        if chunks.is_empty() {
            return Entry::Redirect(Route::Stories);
        }
        Entry::Ready(Self {
            story,
            chunks,
            index: 0,
            zones,
        })
    }

    /// The story being viewed.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// The displayed chunk.
    pub fn current(&self) -> &Chunk {
        &self.chunks[self.index]
    }

    /// Index of the displayed chunk.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the viewer has no chunks; never true once entered.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Segment row: one per chunk.
    pub fn progress(&self) -> Progress {
        Progress::new(self.index, self.chunks.len())
    }

    /// Step forward. On the last chunk this finishes the story instead.
    pub fn advance(&mut self) -> Transition {
        if self.index + 1 < self.chunks.len() {
            self.index += 1;
            Transition::None
        } else {
            debug!(story = %self.story.id, "chunks finished");
            Transition::Push(FINISH_ROUTE)
        }
    }

    /// Step back. Does nothing on the first chunk.
    pub fn back(&mut self) -> Transition {
        self.index = self.index.saturating_sub(1);
        Transition::None
    }

    /// Handle a tap at `x` on a screen `width` wide.
    pub fn tap(&mut self, x: f32, width: f32) -> Transition {
        match classify_tap(x, width, &self.zones) {
            TapSide::Back => self.back(),
            TapSide::Advance => self.advance(),
        }
    }

    /// Close button: back to the carousel.
    pub fn close(&self) -> Transition {
        Transition::Replace(Route::Stories)
    }

    /// "Chunk N of M".
    pub fn position_label(&self) -> String {
        format!("Chunk {} of {}", self.index + 1, self.chunks.len())
    }

    /// Hint for the back zone, hidden on the first chunk.
    pub fn back_hint(&self) -> Option<&'static str> {
        (self.index > 0).then_some("← Tap left")
    }

    /// Hint for the advance zone.
    pub fn advance_hint(&self) -> &'static str {
        if self.progress().is_last() {
            "Tap right to finish →"
        } else {
            "Tap right →"
        }
    }
}
