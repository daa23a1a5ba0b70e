//! Responder
//!
//! Stateful front door over the classifier and recommender. Each instance owns
//! a shared handle to the dataset and its own history, so independent sessions
//! are just independent responders.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::classifier::{self, QueryAnalysis};
use crate::dataset::Dataset;
use crate::history::{ConversationTurn, History};
use crate::recommender;

/// Outcome of answering one query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub analysis: QueryAnalysis,
    pub response: String,
}

/// Query responder with an append-only history
#[derive(Debug)]
pub struct Responder {
    dataset: Arc<Dataset>,
    history: Mutex<History>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(Dataset::builtin()))
    }
}

impl Responder {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            history: Mutex::new(History::new()),
        }
    }

    /// Classify a query
    pub fn analyze(&self, text: &str) -> QueryAnalysis {
        classifier::analyze(text)
    }

    /// Render the response for an analysis. Does not touch history.
    pub fn recommend(&self, analysis: &QueryAnalysis) -> String {
        recommender::recommend(analysis, &self.dataset)
    }

    /// Append one exchange to history
    pub fn record_turn(&self, query: &str, response: &str) {
        self.lock_history().push(ConversationTurn::new(query, response));
    }

    /// Analyze, recommend and record in one step
    pub fn respond(&self, query: &str) -> Reply {
        let analysis = self.analyze(query);
        let response = self.recommend(&analysis);
        self.record_turn(query, &response);

        Reply { analysis, response }
    }

    /// Comparison of every asset, bypassing classification
    pub fn compare(&self) -> String {
        recommender::render_comparison(&self.dataset)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Snapshot of recorded turns, oldest first
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.lock_history().turns().to_vec()
    }

    pub fn turn_count(&self) -> usize {
        self.lock_history().len()
    }

    fn lock_history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("History lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
