pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate;
use crate::scoring::handlers::handle_score;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Cover letter API
        .route("/api/v1/cover-letters/score", post(handle_score))
        .route("/api/v1/cover-letters/generate", post(handle_generate))
        .with_state(state)
}
