//! HTTP API route definitions

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};

/// Create the API router with all routes mounted under /api/v1
pub fn create_router(state: AppState) -> Router {
    // Multipart framing adds overhead beyond the file itself
    let body_limit = state.config.server.max_upload_bytes + 64 * 1024;

    let api_v1 = Router::new()
        .route("/health", get(handlers::health))
        .route("/handbook", post(handlers::upload_handbook))
        .route("/query", post(handlers::query))
        .route("/status", get(handlers::handbook_status))
        .route("/feedback", post(handlers::submit_feedback))
        .route("/feedback/stats", get(handlers::feedback_stats))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    Router::new().nest("/api/v1", api_v1)
}
