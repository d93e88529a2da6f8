//! Client for the local Ollama chat API, used for exactly one thing:
//! asking a vision model to read the number shown on a display photo.

use std::error::Error;
use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use tokio::time::{timeout, Duration};

/// The fallback ("say '0'") is a model-side convention only; whatever text
/// the model returns is passed through verbatim after trimming.
pub const DISPLAY_PROMPT: &str =
    "Read the digital number on this display. Return ONLY the number. If unsure, say '0'.";

pub struct OllamaClient {
    base_url: String,
    model: String,
    timeout_ms: u64,
    http: reqwest::Client,
}

#[derive(Debug)]
pub enum InferenceError {
    Timeout,
    Request(reqwest::Error),
    BackendStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    MalformedResponse(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "inference request timed out"),
            Self::Request(err) => write!(f, "failed to reach inference backend: {err}"),
            Self::BackendStatus { status, body } => {
                write!(f, "inference backend returned {status}: {body}")
            }
            Self::MalformedResponse(detail) => {
                write!(f, "could not parse inference response: {detail}")
            }
        }
    }
}

impl Error for InferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout_ms,
            http: reqwest::Client::new(),
        }
    }

    /// Sends the image to the vision model and returns its trimmed answer.
    /// One blocking round-trip, no retries.
    pub async fn read_display(&self, image: &[u8]) -> Result<String, InferenceError> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": DISPLAY_PROMPT,
                "images": [STANDARD.encode(image)],
            }],
            "stream": false,
        });

        let url = format!("{}/api/chat", self.base_url);
        let fut = self.http.post(&url).json(&payload).send();

        let response = timeout(Duration::from_millis(self.timeout_ms), fut)
            .await
            .map_err(|_| InferenceError::Timeout)?
            .map_err(InferenceError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(InferenceError::BackendStatus { status, body });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|err| InferenceError::MalformedResponse(err.to_string()))?;

        Ok(finalize(&chat.message.content))
    }
}

// The model's answer is passed through as-is, numeric or not, empty or not.
fn finalize(content: &str) -> String {
    content.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(finalize(" 42 \n"), "42");
    }

    #[test]
    fn whitespace_only_content_becomes_empty_result() {
        assert_eq!(finalize(" \n\t"), "");
    }

    #[test]
    fn parses_chat_message_content() {
        let raw = r#"{"model":"qwen3-vl:8b","message":{"role":"assistant","content":"7"},"done":true}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.message.content, "7");
    }
}
