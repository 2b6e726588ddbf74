//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use habibi_types::error::GuideError;

use super::response::ApiMeta;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Blank input, unknown category, malformed id.
    Validation(String),
    /// No live session with this id.
    SessionNotFound,
    /// The generation service call failed; message is user-facing.
    Dispatch(String),
}

impl AppError {
    /// Map a translator/explore failure (`AI Error: ...`).
    pub fn ai(e: GuideError) -> Self {
        Self::from_guide(e, "AI Error")
    }

    /// Map a chat failure (`Chat Error: ...`).
    pub fn chat(e: GuideError) -> Self {
        Self::from_guide(e, "Chat Error")
    }

    fn from_guide(e: GuideError, prefix: &str) -> Self {
        match e {
            GuideError::EmptyInput => AppError::Validation(GuideError::EmptyInput.to_string()),
            GuideError::Dispatch(d) => AppError::Dispatch(format!("{prefix}: {d}")),
        }
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::SessionNotFound => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
            AppError::Dispatch(_) => (StatusCode::BAD_GATEWAY, "AI_ERROR"),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Dispatch(msg) => msg.clone(),
            AppError::SessionNotFound => "Session not found".to_string(),
        }
    }
}

/// An [`AppError`] bound to the request it failed, so the error envelope
/// carries the same `meta` as a success would.
///
/// Built with [`RequestContext::fail`](super::response::RequestContext::fail).
#[derive(Debug)]
pub struct ApiError {
    pub error: AppError,
    pub meta: ApiMeta,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.error.status_and_code();

        let body = json!({
            "data": null,
            "meta": self.meta,
            "errors": [{
                "code": code,
                "message": self.error.message(),
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::RequestContext;
    use habibi_types::error::DispatchError;

    fn dispatch() -> GuideError {
        GuideError::Dispatch(DispatchError {
            message: "authentication failed".to_string(),
        })
    }

    async fn body_of(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_empty_input_is_validation() {
        let err = AppError::ai(GuideError::EmptyInput);
        assert!(matches!(err, AppError::Validation(ref m) if m == "Please enter some text first."));
        let resp = RequestContext::start().fail(err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_dispatch_prefixes() {
        assert!(matches!(
            AppError::ai(dispatch()),
            AppError::Dispatch(ref m) if m == "AI Error: authentication failed"
        ));
        assert!(matches!(
            AppError::chat(dispatch()),
            AppError::Dispatch(ref m) if m == "Chat Error: authentication failed"
        ));
        let resp = RequestContext::start().fail(AppError::chat(dispatch())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_session_not_found_status() {
        let resp = RequestContext::start().fail(AppError::SessionNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_error_envelope_carries_request_meta() {
        let ctx = RequestContext::start();
        let request_id = ctx.request_id().to_string();

        let json = body_of(ctx.fail(AppError::ai(dispatch())).into_response()).await;

        assert!(json["data"].is_null());
        assert_eq!(json["meta"]["request_id"], request_id.as_str());
        assert!(!request_id.is_empty());
        assert!(json["meta"]["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(json["meta"]["response_time_ms"].is_u64());
        assert_eq!(json["errors"][0]["code"], "AI_ERROR");
        assert_eq!(json["errors"][0]["message"], "AI Error: authentication failed");
    }
}
