use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::models::{HistoryEntry, MemberEntry};
use crate::shared::{AppError, AppState};

/// Response for the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub connections: usize,
    pub history_len: usize,
    pub presence_tracking: bool,
}

/// GET /health
#[instrument(name = "health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        connections: state.connection_manager.connection_count().await,
        history_len: state.chat_store.history_len().await,
        presence_tracking: state.chat_store.tracks_presence(),
    })
}

/// HTTP handler for reading the chat history
///
/// GET /history
/// Same content as a historyEvent reply
#[instrument(name = "get_history", skip(state))]
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    let history = state.chat_store.history().await;
    info!(history_len = history.len(), "History requested over HTTP");
    Json(history)
}

/// HTTP handler for the presence snapshot
///
/// GET /members
/// 404 when presence tracking is disabled
#[instrument(name = "get_members", skip(state))]
pub async fn get_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberEntry>>, AppError> {
    let members = state.chat_store.members().await?;
    info!(member_count = members.len(), "Members requested over HTTP");
    Ok(Json(members))
}
