//! External text-generation capability.
//!
//! The synthesizer's sole integration point with the outside world is
//! [`TextGenerator::complete`]: prompt and temperature in, trimmed non-empty
//! text or `None` out. Every failure mode (transport, auth, non-success
//! status, malformed body, empty content) collapses to `None`; the caller
//! decides what absence means.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Environment variable holding the API key. Absent means: run offline.
pub const API_KEY_VAR: &str = "EK_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "EK_BASE_URL";

/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "EK_MODEL";

/// Default chat-completions endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Request timeout. A hardening bound only; the two-attempt cap is what
/// limits total latency.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// An opaque async completion capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `prompt` at the given sampling temperature.
    ///
    /// Returns trimmed, non-empty text on success and `None` on any failure.
    async fn complete(&self, prompt: &str, temperature: f32) -> Option<String>;
}

/// Client for an OpenAI-compatible chat-completions API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Create a client against the given endpoint.
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Create a client from `EK_API_KEY`, `EK_BASE_URL`, and `EK_MODEL`.
    ///
    /// Returns `None` when no API key is configured. That is not an error:
    /// it routes the synthesizer straight to its offline fallback.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_VAR).ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(&base_url, &api_key, &model))
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(&self, prompt: &str, temperature: f32) -> Option<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "completion request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "completion returned non-success");
            return None;
        }

        let body: ChatResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(error = %e, "completion response unparseable");
                return None;
            }
        };

        let text = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())?;

        if text.is_empty() {
            tracing::warn!("completion returned empty content");
            return None;
        }
        Some(text)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_body_parses() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Q1: text  "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.trim(),
            "Q1: text"
        );
    }

    #[test]
    fn empty_choices_parse() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = OpenAiClient::new("http://localhost:8080/", "key", "model");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
