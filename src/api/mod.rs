mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{analyze, health, not_found};
pub use models::{AnalyzeResponse, ErrorResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/analyze", post(analyze))
        .fallback(not_found)
        .with_state(state)
}
