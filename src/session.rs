//! Registry of independent game sessions.

use crate::opponent::{ComputerOpponent, OpponentPlayer};
use crate::presenter::{GameView, Presenter};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Session lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A session with this id is already registered.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),
    /// No session has this id.
    #[display("Session {} not found", _0)]
    NotFound(SessionId),
}

impl std::error::Error for SessionError {}

/// Owns many presenters, one per session.
///
/// Sessions share nothing: each presenter has its own state, view and
/// opponent.
pub struct SessionManager<V, O = ComputerOpponent> {
    sessions: HashMap<SessionId, Presenter<V, O>>,
}

impl<V: GameView, O: OpponentPlayer> SessionManager<V, O> {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Registers a new session.
    #[instrument(skip(self, presenter))]
    pub fn create_session(
        &mut self,
        id: SessionId,
        presenter: Presenter<V, O>,
    ) -> Result<&mut Presenter<V, O>, SessionError> {
        if self.sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }
        info!(session_id = %id, "Created new session");
        Ok(self.sessions.entry(id).or_insert(presenter))
    }

    /// Gets a session by ID.
    pub fn get(&self, id: &str) -> Result<&Presenter<V, O>, SessionError> {
        self.sessions.get(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })
    }

    /// Gets a session by ID for sending events.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Presenter<V, O>, SessionError> {
        self.sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })
    }

    /// Removes a session, returning its presenter.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> Result<Presenter<V, O>, SessionError> {
        let presenter = self
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        info!(session_id = id, "Removed session");
        Ok(presenter)
    }

    /// Lists all session IDs, sorted.
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True when no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<V: GameView, O: OpponentPlayer> Default for SessionManager<V, O> {
    fn default() -> Self {
        Self::new()
    }
}
