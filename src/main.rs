use tracing::info;
use vision_bridge::{build_app, config::AppConfig, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cfg = AppConfig::from_env();
    let app = build_app(AppState::from_config(&cfg), cfg.allow_cors);

    // All interfaces, so the mobile client on the local network can connect.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .expect("bind failed");

    info!(port = cfg.port, model = %cfg.model, "vision bridge listening");

    axum::serve(listener, app).await.expect("server failed");
}
