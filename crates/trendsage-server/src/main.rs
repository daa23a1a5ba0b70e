//! TrendSage HTTP Server
//!
//! Serves the keyword responder over a small JSON API.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trendsage_server::{config::load_env_filter, router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (loads .env first)
    tracing_subscriber::registry()
        .with(load_env_filter(None))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let dataset = config.load_dataset();

    tracing::info!("Tracking {} assets:", dataset.len());
    for name in dataset.names() {
        tracing::info!("  • {}", name);
    }

    let app = router(AppState::with_max_sessions(dataset, config.max_sessions));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 {} running on http://{}", trendsage::BOT_NAME, config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  GET  /api/info              - Bot intro and disclaimer");
    tracing::info!("  POST /api/chat              - Send message");
    tracing::info!("  GET  /api/crypto-data       - Dataset snapshot");
    tracing::info!("  GET  /api/compare           - Compare all assets");
    tracing::info!("  GET  /api/history/{{id}}      - Conversation history");
    tracing::info!("  DELETE /api/history/{{id}}    - Drop a conversation");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
