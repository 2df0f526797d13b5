pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        // Resumes with embedded images can run large; axum's 2 MiB
        // default is too tight.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state)
}
