//! SessionManager: concurrent session map with one writer per session.

use std::sync::{Arc, Mutex, MutexGuard};

use dashmap::DashMap;
use tracing::{debug, warn};

use garage_core::config::SessionConfig;

use crate::state::SessionState;

/// Shared handle to one session. Hold its lock for a whole workflow invocation.
pub type SessionHandle = Arc<Mutex<SessionState>>;

/// Lock a session, recovering the state if a previous holder panicked.
pub fn lock_session(handle: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    handle.lock().unwrap_or_else(|poisoned| {
        warn!("session mutex poisoned by an earlier panic; recovering state");
        poisoned.into_inner()
    })
}

/// All live sessions, keyed by session id.
pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionHandle>>,
    config: SessionConfig,
}

impl SessionManager {
    /// Empty manager with the given limits.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config,
        }
    }

    /// Limits this manager was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Return the session for `session_id`, creating it when absent. With no
    /// id, or a blank one, a fresh UUID v4 is assigned.
    /// Returns the id actually used alongside the handle.
    pub fn get_or_create(&self, session_id: Option<&str>) -> (String, SessionHandle) {
        let id = match session_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => uuid::Uuid::new_v4().to_string(),
        };
        let handle = self
            .sessions
            .entry(id.clone())
            .or_insert_with(|| {
                debug!(session_id = %id, "session created");
                Arc::new(Mutex::new(SessionState::new(id.clone())))
            })
            .clone();
        (id, handle)
    }

    /// Shared handle to an existing session, without creating one.
    pub fn handle(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.get(session_id).map(|r| Arc::clone(r.value()))
    }

    /// Cloned snapshot. Blocks while a workflow holds the session.
    pub fn get_session(&self, session_id: &str) -> Option<SessionState> {
        let handle = self.handle(session_id)?;
        let state = lock_session(&handle).clone();
        Some(state)
    }

    /// Insert or replace a session wholesale.
    pub fn insert_session(&self, state: SessionState) {
        self.sessions
            .insert(state.session_id.clone(), Arc::new(Mutex::new(state)));
    }

    /// Remove a session. Returns whether it existed.
    pub fn clear_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Keep only sessions for which `keep` returns true.
    pub(crate) fn retain(&self, mut keep: impl FnMut(&str, &SessionHandle) -> bool) {
        self.sessions.retain(|id, handle| keep(id, handle));
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
