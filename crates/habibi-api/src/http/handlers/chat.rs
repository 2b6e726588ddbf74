//! Chat view handler.
//!
//! Endpoint:
//! - POST /api/v1/sessions/{id}/chat - Send one message in a session
//!
//! The session lock is held for the whole exchange, so concurrent messages
//! to the same session are serialized and their turn pairs never interleave.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use habibi_types::chat::ChatExchange;

use super::parse_uuid;
use crate::http::error::{ApiError, AppError};
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/v1/sessions/{id}/chat - Run one exchange and persist the pair.
///
/// A storage failure does not fail the request; it is reported in
/// `storage_error` alongside the reply.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatExchange>>, ApiError> {
    let ctx = RequestContext::start();

    let session_id = parse_uuid(&id).map_err(|e| ctx.fail(e))?;
    let handle = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| ctx.fail(AppError::SessionNotFound))?;

    let exchange = {
        let mut session = handle.lock().await;
        state
            .guide_service
            .chat(&mut session, &body.message)
            .await
            .map_err(|e| ctx.fail(AppError::chat(e)))?
    };

    let messages_link = format!("/api/v1/sessions/{session_id}/messages");
    Ok(Json(ctx.success(exchange).with_link("messages", &messages_link)))
}
