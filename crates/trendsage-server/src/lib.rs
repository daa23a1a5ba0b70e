//! # trendsage-server
//!
//! Axum JSON API over the TrendSage responder.

pub mod config;
pub mod handlers;
pub mod state;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::ServerConfig;
pub use state::AppState;

use crate::handlers::{
    chat_handler, compare, crypto_data, delete_history, health_check, history, info,
};

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/info", get(info))

        // Responder API
        .route("/api/chat", post(chat_handler))
        .route("/api/crypto-data", get(crypto_data))
        .route("/api/compare", get(compare))
        .route(
            "/api/history/{conversation_id}",
            get(history).delete(delete_history),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
