//! Conversation History
//!
//! Append-only record of answered queries. Nothing reads it back when
//! classifying; it exists for callers that want to inspect a session.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One answered query
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversationTurn {
    /// When the exchange was recorded
    pub timestamp: DateTime<Utc>,

    /// Query text exactly as submitted
    pub query: String,

    /// Rendered reply
    pub response: String,
}

impl ConversationTurn {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            query: query.into(),
            response: response.into(),
        }
    }
}

/// Ordered turns; only ever grows
#[derive(Clone, Debug, Default)]
pub struct History {
    turns: Vec<ConversationTurn>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
