//! Story carousel: one story at a time, horizontal swipes to browse,
//! swipe up to dive into the chunks.

use std::collections::BTreeSet;

use ss_core::{ContentProvider, Story, StoryId};
use ss_session::{KeyValueStore, SessionState};
use tracing::{debug, info};

use crate::config::GestureConfig;
use crate::error::FlowResult;
use crate::gesture::{Drag, Swipe, classify_drag};
use crate::progress::Progress;
use crate::route::{Route, Transition};

/// Story browser state.
#[derive(Debug, Clone)]
pub struct StoryBrowser {
    stories: Vec<Story>,
    index: usize,
    gesture: GestureConfig,
}

impl StoryBrowser {
    /// Open the browser on the first story not yet consumed.
    ///
    /// Consumed ids that are not in the catalog are pruned from storage. When
    /// every story has been consumed the set is cleared and browsing starts
    /// over at the first story.
    pub fn enter<P, S>(
        provider: &P,
        session: &mut SessionState<S>,
        gesture: GestureConfig,
    ) -> FlowResult<Self>
    where
        P: ContentProvider + ?Sized,
        S: KeyValueStore,
    {
        let stories = provider.stories().to_vec();

        let stored = session.consumed_stories();
        let consumed: BTreeSet<StoryId> = stored
            .iter()
            .copied()
            .filter(|id| provider.contains(*id))
            .collect();
        if consumed.len() != stored.len() {
            debug!(
                dropped = stored.len() - consumed.len(),
                "pruning unknown consumed ids"
            );
            session.set_consumed_stories(&consumed)?;
        }

        let index = match stories.iter().position(|s| !consumed.contains(&s.id)) {
            Some(i) => i,
            None => {
                info!("all stories consumed, starting over");
                session.clear_consumed()?;
                0
            }
        };

        Ok(Self {
            stories,
            index,
            gesture,
        })
    }

    /// Index of the displayed story.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stories in the carousel.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the carousel has no stories.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// The displayed story. `None` only for an empty catalog.
    pub fn current(&self) -> Option<&Story> {
        self.stories.get(self.index)
    }

    /// Marker row: one per story.
    pub fn progress(&self) -> Progress {
        Progress::new(self.index, self.stories.len())
    }

    /// Show the next story. Returns false at the last story.
    pub fn next_story(&mut self) -> bool {
        if self.index + 1 < self.stories.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Show the previous story. Returns false at the first story.
    pub fn previous_story(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Dive into the displayed story: persist it as the current story, mark
    /// it consumed, and open the chunk viewer.
    pub fn dive<S: KeyValueStore>(&mut self, session: &mut SessionState<S>) -> FlowResult<Transition> {
        let Some(story) = self.stories.get(self.index) else {
            return Ok(Transition::None);
        };
        session.set_current_story(story)?;
        session.mark_consumed(story.id)?;
        debug!(story = %story.id, "dive");
        Ok(Transition::Push(Route::Chunks))
    }

    /// Handle the end of a drag over the card.
    pub fn drag_end<S: KeyValueStore>(
        &mut self,
        drag: &Drag,
        session: &mut SessionState<S>,
    ) -> FlowResult<Transition> {
        match classify_drag(drag, &self.gesture) {
            Swipe::Left => {
                self.next_story();
                Ok(Transition::None)
            }
            Swipe::Right => {
                self.previous_story();
                Ok(Transition::None)
            }
            Swipe::Up => self.dive(session),
            Swipe::None => Ok(Transition::None),
        }
    }

    /// Header back button: return to the landing route.
    pub fn back(&self) -> Transition {
        Transition::Replace(Route::Onboarding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_core::Catalog;
    use ss_session::MemoryStore;

    fn open(session: &mut SessionState<MemoryStore>) -> StoryBrowser {
        StoryBrowser::enter(&Catalog::builtin(), session, GestureConfig::default()).unwrap()
    }

    fn consume(session: &mut SessionState<MemoryStore>, ids: &[u32]) {
        for &id in ids {
            session.mark_consumed(StoryId(id)).unwrap();
        }
    }

    #[test]
    fn fresh_session_starts_at_zero() {
        let mut session = SessionState::in_memory();
        let browser = open(&mut session);
        assert_eq!(browser.index(), 0);
        assert_eq!(browser.len(), 5);
        assert_eq!(browser.current().unwrap().id, StoryId(1));
    }

    #[test]
    fn starts_at_first_unconsumed() {
        let mut session = SessionState::in_memory();
        consume(&mut session, &[1, 2]);
        assert_eq!(open(&mut session).index(), 2);
    }

    #[test]
    fn gap_in_consumed_is_found() {
        let mut session = SessionState::in_memory();
        consume(&mut session, &[1, 3, 4]);
        assert_eq!(open(&mut session).index(), 1);
    }

    #[test]
    fn all_consumed_resets() {
        let mut session = SessionState::in_memory();
        consume(&mut session, &[1, 2, 3, 4, 5]);
        let browser = open(&mut session);
        assert_eq!(browser.index(), 0);
        assert!(session.consumed_stories().is_empty());
    }

    #[test]
    fn unknown_ids_are_pruned() {
        let mut session = SessionState::in_memory();
        consume(&mut session, &[1, 42]);
        let browser = open(&mut session);
        assert_eq!(browser.index(), 1);
        let ids: Vec<StoryId> = session.consumed_stories().into_iter().collect();
        assert_eq!(ids, vec![StoryId(1)]);
    }

    #[test]
    fn unknown_ids_do_not_block_reset() {
        let mut session = SessionState::in_memory();
        consume(&mut session, &[1, 2, 3, 4, 5, 99]);
        assert_eq!(open(&mut session).index(), 0);
        assert!(session.consumed_stories().is_empty());
    }

    #[test]
    fn next_and_previous_clamp() {
        let mut session = SessionState::in_memory();
        let mut b = open(&mut session);
        assert!(!b.previous_story());
        for _ in 0..4 {
            assert!(b.next_story());
        }
        assert!(!b.next_story());
        assert_eq!(b.index(), 4);
    }

    #[test]
    fn swipes_move_between_stories() {
        let mut session = SessionState::in_memory();
        let mut b = open(&mut session);
        let t = b.drag_end(&Drag::new(-150.0, 0.0), &mut session).unwrap();
        assert_eq!(t, Transition::None);
        assert_eq!(b.index(), 1);
        b.drag_end(&Drag::new(150.0, 0.0), &mut session).unwrap();
        assert_eq!(b.index(), 0);
    }

    #[test]
    fn swipe_up_dives() {
        let mut session = SessionState::in_memory();
        let mut b = open(&mut session);
        b.next_story();
        let t = b.drag_end(&Drag::new(0.0, -200.0), &mut session).unwrap();
        assert_eq!(t, Transition::Push(Route::Chunks));
        assert_eq!(session.current_story().unwrap().id, StoryId(2));
        assert!(session.consumed_stories().contains(&StoryId(2)));
    }

    #[test]
    fn reentry_skips_dived_story() {
        let mut session = SessionState::in_memory();
        let mut b = open(&mut session);
        b.dive(&mut session).unwrap();
        assert_eq!(open(&mut session).index(), 1);
    }

    #[test]
    fn progress_tracks_index() {
        let mut session = SessionState::in_memory();
        let mut b = open(&mut session);
        b.next_story();
        assert_eq!(b.progress(), Progress::new(1, 5));
    }

    #[test]
    fn back_goes_to_landing() {
        let mut session = SessionState::in_memory();
        assert_eq!(open(&mut session).back(), Transition::Replace(Route::Onboarding));
    }
}
