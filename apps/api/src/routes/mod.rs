pub mod extract_text;
pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/extract-text", post(extract_text::handle_extract_text))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state)
}
