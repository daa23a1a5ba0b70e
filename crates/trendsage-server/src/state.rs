//! Application State

use std::sync::Arc;

use trendsage::{Dataset, MemorySessionStore, Responder};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Reference dataset, read-only for the life of the process
    pub dataset: Arc<Dataset>,

    /// Per-conversation responders
    pub sessions: Arc<MemorySessionStore>,

    /// Session-less responder for dataset-wide views such as the comparison
    pub responder: Arc<Responder>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_sessions(dataset.clone(), MemorySessionStore::new(dataset))
    }

    /// State whose session store keeps at most `max_sessions` conversations
    pub fn with_max_sessions(dataset: Arc<Dataset>, max_sessions: usize) -> Self {
        Self::with_sessions(
            dataset.clone(),
            MemorySessionStore::with_capacity(dataset, max_sessions),
        )
    }

    fn with_sessions(dataset: Arc<Dataset>, sessions: MemorySessionStore) -> Self {
        Self {
            responder: Arc::new(Responder::new(dataset.clone())),
            sessions: Arc::new(sessions),
            dataset,
        }
    }
}
