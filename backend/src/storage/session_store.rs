//! In-memory store of live vending sessions.
//!
//! Every mounted UI owns one session, addressed by a UUID. Sessions are never
//! persisted: removing one resets it and drops it.
//!
//! Sessions do not expire. A presentation layer must delete its session on
//! teardown; the store refuses new sessions once `max_sessions` are live.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::TransactionSession;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("session {0} not found")]
    SessionNotFound(Uuid),
    #[error("session limit of {0} reached")]
    TooManySessions(usize),
}

pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// A session together with its bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub session: TransactionSession,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    /// Open a fresh session and return a copy of it
    pub async fn create(&self) -> Result<StoredSession, StoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            warn!("Refusing new session, {} already open", sessions.len());
            return Err(StoreError::TooManySessions(self.max_sessions));
        }

        let stored = StoredSession {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            session: TransactionSession::new(),
        };

        sessions.insert(stored.id, stored.clone());
        info!("Opened session {}", stored.id);
        Ok(stored)
    }

    pub async fn get(&self, id: Uuid) -> Result<StoredSession, StoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::SessionNotFound(id))
    }

    /// Run one operation against a session under the write lock.
    ///
    /// Returns the operation's result and a copy of the session afterwards.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        operation: impl FnOnce(&mut TransactionSession) -> R,
    ) -> Result<(R, StoredSession), StoreError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&id).ok_or(StoreError::SessionNotFound(id))?;

        let result = operation(&mut stored.session);
        Ok((result, stored.clone()))
    }

    /// Tear a session down. Returns the total that was still inserted.
    pub async fn remove(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut stored = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or(StoreError::SessionNotFound(id))?;

        let abandoned = stored.session.total_inserted();
        stored.session.reset();
        info!("Closed session {} ({} left inserted)", id, abandoned);
        Ok(abandoned)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
