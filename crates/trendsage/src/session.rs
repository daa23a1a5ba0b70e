//! Session Management
//!
//! Keeps one [`Responder`] per conversation id. All sessions share the same
//! dataset; each has its own history. Sessions live in memory only and the
//! store is bounded: once full, the oldest session is evicted to make room.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::dataset::Dataset;
use crate::responder::Responder;

/// Sessions kept before the oldest is evicted
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Default)]
struct Sessions {
    by_id: HashMap<SessionId, Arc<Responder>>,
    /// Creation order, oldest first
    order: VecDeque<SessionId>,
}

/// Bounded in-memory session store
pub struct MemorySessionStore {
    dataset: Arc<Dataset>,
    max_sessions: usize,
    sessions: RwLock<Sessions>,
}

impl MemorySessionStore {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_capacity(dataset, DEFAULT_MAX_SESSIONS)
    }

    /// Store holding at most `max_sessions` (minimum 1) sessions
    pub fn with_capacity(dataset: Arc<Dataset>, max_sessions: usize) -> Self {
        Self {
            dataset,
            max_sessions: max_sessions.max(1),
            sessions: RwLock::new(Sessions::default()),
        }
    }

    /// Look up `id`, creating the session if it is missing.
    /// With no id, a fresh session is started under a new one.
    pub fn get_or_create(&self, id: Option<SessionId>) -> (SessionId, Arc<Responder>) {
        let id = id.unwrap_or_default();

        if let Some(responder) = self.get(&id) {
            return (id, responder);
        }

        let mut sessions = self.write();
        if let Some(responder) = sessions.by_id.get(&id) {
            return (id, responder.clone());
        }

        while sessions.by_id.len() >= self.max_sessions {
            let Some(oldest) = sessions.order.pop_front() else {
                break;
            };
            sessions.by_id.remove(&oldest);
            tracing::debug!(session = %oldest, "Evicted oldest session");
        }

        tracing::info!(session = %id, "Starting new session");
        let responder = Arc::new(Responder::new(self.dataset.clone()));
        sessions.by_id.insert(id.clone(), responder.clone());
        sessions.order.push_back(id.clone());

        (id, responder)
    }

    pub fn get(&self, id: &SessionId) -> Option<Arc<Responder>> {
        self.read().by_id.get(id).cloned()
    }

    /// Drop a session and its history
    pub fn remove(&self, id: &SessionId) -> bool {
        let mut sessions = self.write();
        let removed = sessions.by_id.remove(id).is_some();
        if removed {
            sessions.order.retain(|existing| existing != id);
            tracing::info!(session = %id, "Removed session");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.max_sessions
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    fn read(&self) -> RwLockReadGuard<'_, Sessions> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Sessions> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemorySessionStore {
        MemorySessionStore::new(Arc::new(Dataset::builtin()))
    }

    #[test]
    fn test_new_session_without_id() {
        let store = store();
        let (a, _) = store.get_or_create(None);
        let (b, _) = store.get_or_create(None);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_existing_session_is_reused() {
        let store = store();
        let (id, responder) = store.get_or_create(None);
        responder.respond("what's trending");

        let (same_id, same) = store.get_or_create(Some(id.clone()));
        assert_eq!(same_id, id);
        assert_eq!(same.turn_count(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id_is_adopted() {
        let store = store();
        let id = SessionId::from_string("chat-42");
        let (got, _) = store.get_or_create(Some(id.clone()));
        assert_eq!(got.as_str(), "chat-42");
        assert!(store.get(&id).is_some());
    }

    #[test]
    fn test_remove() {
        let store = store();
        let (id, _) = store.get_or_create(None);
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_full_store_evicts_oldest() {
        let store = MemorySessionStore::with_capacity(Arc::new(Dataset::builtin()), 2);
        let (first, _) = store.get_or_create(Some(SessionId::from_string("a")));
        store.get_or_create(Some(SessionId::from_string("b")));
        store.get_or_create(Some(SessionId::from_string("c")));

        assert_eq!(store.len(), 2);
        assert!(store.get(&first).is_none());
        assert!(store.get(&SessionId::from_string("b")).is_some());
        assert!(store.get(&SessionId::from_string("c")).is_some());
    }

    #[test]
    fn test_removed_session_frees_its_slot() {
        let store = MemorySessionStore::with_capacity(Arc::new(Dataset::builtin()), 2);
        store.get_or_create(Some(SessionId::from_string("a")));
        store.get_or_create(Some(SessionId::from_string("b")));
        assert!(store.remove(&SessionId::from_string("a")));

        store.get_or_create(Some(SessionId::from_string("c")));
        assert_eq!(store.len(), 2);
        assert!(store.get(&SessionId::from_string("b")).is_some());
    }

    #[test]
    fn test_many_anonymous_chats_stay_bounded() {
        let store = MemorySessionStore::with_capacity(Arc::new(Dataset::builtin()), 50);
        for _ in 0..500 {
            let (_, responder) = store.get_or_create(None);
            responder.respond("what's trending");
        }
        assert_eq!(store.len(), 50);
        assert_eq!(store.capacity(), 50);
    }
}
