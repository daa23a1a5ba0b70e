//! HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use trendsage::{
    ConversationTurn, Dataset, QueryAnalysis, SessionId, BOT_INTRO, BOT_NAME, DISCLAIMER,
};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub assets: usize,
    pub sessions: usize,
}

#[derive(Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub intro: &'static str,
    pub disclaimer: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub analysis: QueryAnalysis,
    pub conversation_id: String,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub conversation_id: String,
    pub turns: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        assets: state.dataset.len(),
        sessions: state.sessions.len(),
    })
}

/// Bot identity and disclaimer
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: BOT_NAME,
        intro: BOT_INTRO,
        disclaimer: DISCLAIMER,
    })
}

/// Answer one chat message within a conversation
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let requested = payload.conversation_id.map(SessionId::from_string);
    let (id, responder) = state.sessions.get_or_create(requested);

    let reply = responder.respond(&payload.message);
    tracing::debug!(session = %id, intents = ?reply.analysis.intents(), "Answered chat message");

    Json(ChatResponse {
        response: reply.response,
        analysis: reply.analysis,
        conversation_id: id.to_string(),
    })
}

/// Dataset snapshot, in insertion order
pub async fn crypto_data(State(state): State<AppState>) -> Json<Dataset> {
    Json(state.dataset.as_ref().clone())
}

/// Comparison of all tracked assets
pub async fn compare(State(state): State<AppState>) -> Json<CompareResponse> {
    Json(CompareResponse {
        comparison: state.responder.compare(),
    })
}

/// Recorded turns for one conversation
pub async fn history(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<HistoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = SessionId::from_string(conversation_id);
    let responder = state.sessions.get(&id).ok_or_else(|| session_not_found(&id))?;

    Ok(Json(HistoryResponse {
        conversation_id: id.to_string(),
        turns: responder.history(),
    }))
}

/// Drop a conversation and its history
pub async fn delete_history(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let id = SessionId::from_string(conversation_id);
    if state.sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(&id))
    }
}

fn session_not_found(id: &SessionId) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No conversation with id {id}"),
            code: "SESSION_NOT_FOUND".into(),
        }),
    )
}
