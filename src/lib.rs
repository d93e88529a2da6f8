pub mod api;
pub mod config;
pub mod ollama;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use config::AppConfig;
use ollama::OllamaClient;

#[derive(Clone)]
pub struct AppState {
    pub ollama: Arc<OllamaClient>,
}

impl AppState {
    pub fn new(ollama: OllamaClient) -> Self {
        Self {
            ollama: Arc::new(ollama),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(OllamaClient::new(
            cfg.ollama_url.clone(),
            cfg.model.clone(),
            cfg.timeout_ms,
        ))
    }
}

pub fn build_app(state: AppState, allow_cors: bool) -> Router {
    let app = api::router(state);
    if allow_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
