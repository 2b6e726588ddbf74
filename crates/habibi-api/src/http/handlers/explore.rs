//! Explore view handlers.
//!
//! Endpoints:
//! - GET  /api/v1/categories      - List recommendation categories
//! - POST /api/v1/recommendations - Recommendations for one category

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use habibi_types::guide::Category;

use crate::http::error::{ApiError, AppError};
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub category: Category,
    pub text: String,
}

/// GET /api/v1/categories - Category labels in display order.
pub async fn list_categories() -> Json<ApiResponse<Vec<&'static str>>> {
    let ctx = RequestContext::start();
    let labels = Category::ALL.iter().map(Category::label).collect();
    Json(ctx.success(labels).with_link("self", "/api/v1/categories"))
}

/// POST /api/v1/recommendations - Send the recommendation prompt for a category.
pub async fn recommend(
    State(state): State<AppState>,
    Json(body): Json<RecommendationRequest>,
) -> Result<Json<ApiResponse<RecommendationResponse>>, ApiError> {
    let ctx = RequestContext::start();

    let category: Category = body
        .category
        .parse()
        .map_err(|e| ctx.fail(AppError::Validation(e)))?;
    let text = state
        .guide_service
        .recommend(category)
        .await
        .map_err(|e| ctx.fail(AppError::ai(e)))?;

    Ok(Json(
        ctx.success(RecommendationResponse { category, text })
            .with_link("self", "/api/v1/recommendations")
            .with_link("categories", "/api/v1/categories"),
    ))
}
