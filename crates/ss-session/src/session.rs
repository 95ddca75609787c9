//! Typed access to the persisted session flags.
//!
//! `SessionState` wraps a [`KeyValueStore`] and owns the encoding of each
//! key. Malformed values are treated as absent rather than surfaced.

use std::collections::BTreeSet;

use ss_core::{Story, StoryId};
use tracing::{debug, warn};

use crate::error::SessionResult;
use crate::store::{KeyValueStore, MemoryStore};

/// Storage keys used by the session.
pub mod keys {
    /// `"true"` once onboarding is complete; absent otherwise.
    pub const HAS_STARTED: &str = "hasStarted";
    /// JSON-encoded story last selected for a deep dive.
    pub const CURRENT_STORY: &str = "currentStory";
    /// JSON array of consumed story ids.
    pub const CONSUMED_STORIES: &str = "consumedStories";

    /// Every key the session writes.
    pub const ALL: [&str; 3] = [HAS_STARTED, CURRENT_STORY, CONSUMED_STORIES];
}

/// Session flags over an injected store.
#[derive(Debug, Clone, Default)]
pub struct SessionState<S> {
    store: S,
}

impl SessionState<MemoryStore> {
    /// A session over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: KeyValueStore> SessionState<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether onboarding has been completed.
    pub fn has_started(&self) -> bool {
        self.store.get(keys::HAS_STARTED).as_deref() == Some("true")
    }

    /// Record onboarding completion.
    pub fn mark_started(&mut self) -> SessionResult<()> {
        debug!("onboarding complete");
        self.store.set(keys::HAS_STARTED, "true")
    }

    /// The story last selected for a deep dive, if any.
    pub fn current_story(&self) -> Option<Story> {
        let raw = self.store.get(keys::CURRENT_STORY)?;
        match serde_json::from_str(&raw) {
            Ok(story) => Some(story),
            Err(e) => {
                warn!(error = %e, "malformed currentStory, treating as absent");
                None
            }
        }
    }

    /// Persist the story selected for a deep dive.
    pub fn set_current_story(&mut self, story: &Story) -> SessionResult<()> {
        let json = serde_json::to_string(story)?;
        debug!(story = %story.id, "current story set");
        self.store.set(keys::CURRENT_STORY, &json)
    }

    /// Ids of stories the player has dived into.
    pub fn consumed_stories(&self) -> BTreeSet<StoryId> {
        let Some(raw) = self.store.get(keys::CONSUMED_STORIES) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Vec<StoryId>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                warn!(error = %e, "malformed consumedStories, treating as empty");
                BTreeSet::new()
            }
        }
    }

    /// Replace the consumed set.
    pub fn set_consumed_stories(&mut self, ids: &BTreeSet<StoryId>) -> SessionResult<()> {
        let list: Vec<StoryId> = ids.iter().copied().collect();
        let json = serde_json::to_string(&list)?;
        self.store.set(keys::CONSUMED_STORIES, &json)
    }

    /// Add a story to the consumed set. Returns true if it was newly added.
    pub fn mark_consumed(&mut self, id: StoryId) -> SessionResult<bool> {
        let mut ids = self.consumed_stories();
        if !ids.insert(id) {
            return Ok(false);
        }
        debug!(story = %id, consumed = ids.len(), "story consumed");
        self.set_consumed_stories(&ids)?;
        Ok(true)
    }

    /// Reset the consumed set to empty.
    pub fn clear_consumed(&mut self) -> SessionResult<()> {
        debug!("consumed stories cleared");
        self.store.set(keys::CONSUMED_STORIES, "[]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: u32) -> Story {
        Story::new(id, format!("Story {id}"), "desc", "img")
    }

    #[test]
    fn fresh_session_is_empty() {
        let s = SessionState::in_memory();
        assert!(!s.has_started());
        assert!(s.current_story().is_none());
        assert!(s.consumed_stories().is_empty());
    }

    #[test]
    fn mark_started_persists_true() {
        let mut s = SessionState::in_memory();
        s.mark_started().unwrap();
        assert!(s.has_started());
        assert_eq!(s.store().get(keys::HAS_STARTED).as_deref(), Some("true"));
    }

    #[test]
    fn has_started_requires_literal_true() {
        let mut store = MemoryStore::new();
        store.set(keys::HAS_STARTED, "yes").unwrap();
        assert!(!SessionState::new(store).has_started());
    }

    #[test]
    fn current_story_roundtrip() {
        let mut s = SessionState::in_memory();
        s.set_current_story(&story(2)).unwrap();
        assert_eq!(s.current_story(), Some(story(2)));
    }

    #[test]
    fn malformed_current_story_is_absent() {
        let mut store = MemoryStore::new();
        store.set(keys::CURRENT_STORY, "{\"id\":").unwrap();
        assert!(SessionState::new(store).current_story().is_none());
    }

    #[test]
    fn consumed_stored_as_integer_list() {
        let mut s = SessionState::in_memory();
        s.mark_consumed(StoryId(3)).unwrap();
        s.mark_consumed(StoryId(1)).unwrap();
        assert_eq!(
            s.store().get(keys::CONSUMED_STORIES).as_deref(),
            Some("[1,3]")
        );
    }

    #[test]
    fn mark_consumed_reports_novelty() {
        let mut s = SessionState::in_memory();
        assert!(s.mark_consumed(StoryId(1)).unwrap());
        assert!(!s.mark_consumed(StoryId(1)).unwrap());
        assert_eq!(s.consumed_stories().len(), 1);
    }

    #[test]
    fn malformed_consumed_is_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::CONSUMED_STORIES, "[1, \"two\"]").unwrap();
        let mut s = SessionState::new(store);
        assert!(s.consumed_stories().is_empty());
        // Writing recovers the key.
        s.mark_consumed(StoryId(2)).unwrap();
        assert_eq!(s.consumed_stories().into_iter().collect::<Vec<_>>(), vec![StoryId(2)]);
    }

    #[test]
    fn clear_consumed_writes_empty_list() {
        let mut s = SessionState::in_memory();
        s.mark_consumed(StoryId(1)).unwrap();
        s.clear_consumed().unwrap();
        assert!(s.consumed_stories().is_empty());
        assert_eq!(s.store().get(keys::CONSUMED_STORIES).as_deref(), Some("[]"));
    }

    #[test]
    fn boxed_store_session() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let mut s = SessionState::new(store);
        s.mark_started().unwrap();
        assert!(s.has_started());
    }
}
