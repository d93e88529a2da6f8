use std::env;

pub struct AppConfig {
    pub port: u16,
    pub ollama_url: String,
    pub model: String,
    pub timeout_ms: u64,
    pub allow_cors: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(5000);

        let ollama_url =
            env::var("OLLAMA_URL").unwrap_or_else(|_| "http://127.0.0.1:11434".to_string());

        let model = env::var("VISION_MODEL").unwrap_or_else(|_| "qwen3-vl:8b".to_string());

        // Vision inference on local hardware can take a while.
        let timeout_ms = env::var("TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(120_000);

        // Permissive by default so the mobile client on the local network
        // can reach the server during development.
        let allow_cors = env::var("ALLOW_CORS")
            .ok()
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(true);

        Self {
            port,
            ollama_url,
            model,
            timeout_ms,
            allow_cors,
        }
    }
}
