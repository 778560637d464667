pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::documents::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health::health_handler))
        .route("/api/v1/documents/preview", post(handlers::handle_preview))
        .route(
            "/api/v1/documents/generate",
            post(handlers::handle_generate),
        )
        .with_state(state)
}
