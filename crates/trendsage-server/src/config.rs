//! Server Configuration
//!
//! Read from the process environment (after `.env` is loaded by the binary).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trendsage::{session::DEFAULT_MAX_SESSIONS, Dataset};

/// Runtime settings for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Optional JSON dataset replacing the built-in one
    pub dataset_path: Option<PathBuf>,

    /// Conversations kept in memory before the oldest is evicted
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            dataset_path: None,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".into());
        let dataset_path = std::env::var("TRENDSAGE_DATASET")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let max_sessions = std::env::var("TRENDSAGE_MAX_SESSIONS")
            .ok()
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_SESSIONS);

        Self {
            bind_addr,
            dataset_path,
            max_sessions,
        }
    }

    /// Load the configured dataset, falling back to the built-in one
    pub fn load_dataset(&self) -> Arc<Dataset> {
        let Some(path) = &self.dataset_path else {
            return Arc::new(Dataset::builtin());
        };

        match Dataset::from_json_file(path) {
            Ok(dataset) => Arc::new(dataset),
            Err(e) => {
                tracing::warn!("⚠ Could not load dataset from {}: {}", path.display(), e);
                tracing::warn!("  Falling back to the built-in dataset");
                Arc::new(Dataset::builtin())
            }
        }
    }
}

/// Load `.env` (or `env_file`), then build the log filter from `RUST_LOG`.
/// Loading comes first so a `RUST_LOG` set in the file takes effect.
pub fn load_env_filter(env_file: Option<&Path>) -> EnvFilter {
    // A missing file is fine; the process environment still applies
    let _ = match env_file {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };

    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()))
}
