//! Application state shared across all screens.

use ss_core::ContentProvider;
use ss_flow::{FlowConfig, FlowError, FlowResult};
use ss_session::{KeyValueStore, MemoryStore, SessionState, keys};
use tracing::{error, warn};

/// Session over whichever store the binary picked at startup.
pub type Session = SessionState<Box<dyn KeyValueStore>>;

/// Shared application state accessible by all screens.
pub struct AppState {
    /// Stories and their derived content.
    pub catalog: Box<dyn ContentProvider>,
    /// Persisted session flags.
    pub session: Session,
    /// Gesture thresholds and tap zones.
    pub config: FlowConfig,
    /// Message shown in the footer, if any.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    volatile: bool,
}

impl AppState {
    /// Create the app state.
    pub fn new(catalog: Box<dyn ContentProvider>, session: Session, config: FlowConfig) -> Self {
        Self {
            catalog,
            session,
            config,
            status: None,
            should_quit: false,
            volatile: false,
        }
    }

    /// Run a session-touching operation, see [`attempt`].
    pub fn attempt<T>(&mut self, op: impl FnMut(&mut Session) -> FlowResult<T>) -> Option<T> {
        attempt(&mut self.session, &mut self.volatile, &mut self.status, op)
    }

    /// Split borrow of the catalog, config and a session runner, for
    /// operations that read the catalog while writing the session.
    pub fn parts(&mut self) -> (&dyn ContentProvider, FlowConfig, Runner<'_>) {
        (
            self.catalog.as_ref(),
            self.config,
            Runner {
                session: &mut self.session,
                volatile: &mut self.volatile,
                status: &mut self.status,
            },
        )
    }

    /// Whether the session has fallen back to memory after a store failure.
    pub fn is_volatile(&self) -> bool {
        self.volatile
    }
}

/// Mutable session access handed out by [`AppState::parts`].
pub struct Runner<'a> {
    session: &'a mut Session,
    volatile: &'a mut bool,
    status: &'a mut Option<String>,
}

impl Runner<'_> {
    /// Run a session-touching operation, see [`attempt`].
    pub fn attempt<T>(&mut self, op: impl FnMut(&mut Session) -> FlowResult<T>) -> Option<T> {
        attempt(self.session, self.volatile, self.status, op)
    }

    /// Read-only access to the session.
    pub fn session(&self) -> &Session {
        self.session
    }
}

/// Run `op` against the session.
///
/// When the store fails, the session is moved onto an in-memory copy of its
/// current values and `op` is retried once, so the app keeps working without
/// persistence. Errors that are not store failures are logged and yield `None`.
pub fn attempt<T>(
    session: &mut Session,
    volatile: &mut bool,
    status: &mut Option<String>,
    mut op: impl FnMut(&mut Session) -> FlowResult<T>,
) -> Option<T> {
    match op(session) {
        Ok(value) => return Some(value),
        Err(FlowError::Session(err)) if !*volatile => {
            error!(%err, "session store failed, continuing in memory");
            *session = SessionState::new(Box::new(snapshot(session)));
            *volatile = true;
            *status = Some("Progress is not being saved".to_string());
        }
        Err(err) => {
            warn!(%err, "operation failed");
            return None;
        }
    }

    match op(session) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(%err, "operation failed after falling back to memory");
            None
        }
    }
}

fn snapshot(session: &Session) -> MemoryStore {
    let mut memory = MemoryStore::new();
    for key in keys::ALL {
        if let Some(value) = session.store().get(key) {
            // Memory writes cannot fail.
            let _ = memory.set(key, &value);
        }
    }
    memory
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_core::{Catalog, StoryId};
    use ss_session::{SessionError, SessionResult};
    use std::path::PathBuf;

    /// Reads succeed, every write fails.
    struct ReadOnly(MemoryStore);

    impl KeyValueStore for ReadOnly {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> SessionResult<()> {
            Err(SessionError::Io {
                path: PathBuf::from("/read-only/session.json"),
                source: std::io::Error::other("read-only"),
            })
        }

        fn remove(&mut self, key: &str) -> SessionResult<()> {
            self.set(key, "")
        }
    }

    fn read_only_app() -> AppState {
        let mut seed = MemoryStore::new();
        seed.set(keys::HAS_STARTED, "true").unwrap();
        seed.set(keys::CONSUMED_STORIES, "[2]").unwrap();
        let session: Session = SessionState::new(Box::new(ReadOnly(seed)));
        AppState::new(Box::new(Catalog::builtin()), session, FlowConfig::default())
    }

    #[test]
    fn store_failure_falls_back_to_memory() {
        let mut app = read_only_app();
        let marked = app.attempt(|s| Ok(s.mark_consumed(StoryId(4))?));
        assert_eq!(marked, Some(true));
        assert!(app.is_volatile());
        assert!(app.status.is_some());

        // Values written before the failure survive the switch.
        assert!(app.session.has_started());
        let consumed = app.session.consumed_stories();
        assert!(consumed.contains(&StoryId(2)));
        assert!(consumed.contains(&StoryId(4)));
    }

    #[test]
    fn other_errors_do_not_switch_stores() {
        let mut app = read_only_app();
        let result: Option<()> = app.attempt(|_| {
            Err(FlowError::InvalidOption { index: 9, count: 4 })
        });
        assert!(result.is_none());
        assert!(!app.is_volatile());
    }

    #[test]
    fn success_passes_through() {
        let session: Session = SessionState::new(Box::new(MemoryStore::new()));
        let mut app = AppState::new(Box::new(Catalog::builtin()), session, FlowConfig::default());
        assert_eq!(app.attempt(|s| Ok(s.has_started())), Some(false));
        assert!(!app.is_volatile());
        assert!(app.status.is_none());
    }
}
