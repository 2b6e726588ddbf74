//! Chat session handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions               - Start a new chat session
//! - GET    /api/v1/sessions/{id}/messages - Transcript of a session
//! - DELETE /api/v1/sessions/{id}          - Discard a session

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use habibi_types::chat::ChatTurn;

use super::parse_uuid;
use crate::http::error::{ApiError, AppError};
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub id: Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

/// POST /api/v1/sessions - Start a new, empty chat session.
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<SessionCreated>>) {
    let ctx = RequestContext::start();

    let (id, handle) = state.sessions.create();
    let started_at = handle.lock().await.started_at();

    let chat_link = format!("/api/v1/sessions/{id}/chat");
    let messages_link = format!("/api/v1/sessions/{id}/messages");
    (
        StatusCode::CREATED,
        Json(
            ctx.success(SessionCreated { id, started_at })
                .with_link("chat", &chat_link)
                .with_link("messages", &messages_link),
        ),
    )
}

/// GET /api/v1/sessions/{id}/messages - Turns in insertion order.
pub async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ChatTurn>>>, ApiError> {
    let ctx = RequestContext::start();

    let session_id = parse_uuid(&id).map_err(|e| ctx.fail(e))?;
    let handle = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| ctx.fail(AppError::SessionNotFound))?;
    let turns = handle.lock().await.all().to_vec();

    let self_link = format!("/api/v1/sessions/{session_id}/messages");
    Ok(Json(ctx.success(turns).with_link("self", &self_link)))
}

/// DELETE /api/v1/sessions/{id} - Drop the in-memory transcript.
///
/// Persisted rows are kept.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let ctx = RequestContext::start();

    let session_id = parse_uuid(&id).map_err(|e| ctx.fail(e))?;
    if !state.sessions.remove(&session_id) {
        return Err(ctx.fail(AppError::SessionNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}
