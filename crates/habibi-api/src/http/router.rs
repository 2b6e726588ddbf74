//! Axum router configuration with middleware.
//!
//! The single-page UI is served at `/`; JSON routes are under `/api/v1/`.
//! Middleware: CORS, tracing.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Translator
        .route("/translate", post(handlers::translate::translate))
        // Explore
        .route("/categories", get(handlers::explore::list_categories))
        .route("/recommendations", post(handlers::explore::recommend))
        // Chat sessions
        .route("/sessions", post(handlers::session::create_session))
        .route("/sessions/{id}", delete(handlers::session::delete_session))
        .route(
            "/sessions/{id}/messages",
            get(handlers::session::get_messages),
        )
        .route("/sessions/{id}/chat", post(handlers::chat::send_message));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - The three-tab guide page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - Liveness, version, model and prompt style.
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.model,
        "prompt_style": state.guide_service.style(),
        "sessions": state.sessions.len(),
    }))
}
