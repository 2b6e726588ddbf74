//! Translator view handler.
//!
//! Endpoint:
//! - POST /api/v1/translate - Translate text into Arabic

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::{ApiError, AppError};
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub text: String,
}

/// POST /api/v1/translate - Send the text through the translation prompt.
pub async fn translate(
    State(state): State<AppState>,
    Json(body): Json<TranslateRequest>,
) -> Result<Json<ApiResponse<TranslateResponse>>, ApiError> {
    let ctx = RequestContext::start();

    let text = state
        .guide_service
        .translate(&body.text)
        .await
        .map_err(|e| ctx.fail(AppError::ai(e)))?;

    Ok(Json(
        ctx.success(TranslateResponse { text })
            .with_link("self", "/api/v1/translate"),
    ))
}
