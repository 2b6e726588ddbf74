//! HTTP layer for the guide.
//!
//! Axum router serving the single-page UI at `/` and the JSON API at
//! `/api/v1/`, with envelope responses and CORS.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
