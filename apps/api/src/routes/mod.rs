pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/policy", get(analysis::handle_policy))
        .route("/api/v1/keywords", post(analysis::handle_keywords))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/extract", post(extraction::handle_extract))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
