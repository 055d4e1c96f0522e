// src/llm/provider.rs
// CompletionClient trait and the OpenAI chat-completions implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::llm::OpenAiConfig;

/// Fixed system instruction prepended to every completion call.
pub const SYSTEM_INSTRUCTION: &str = "You are a creative, uplifting AI assistant that \
creates personalized, engaging content. Always be positive, inspiring, and add a touch of magic.";

/// Penalties held constant across all call sites to discourage repetition.
const PRESENCE_PENALTY: f32 = 0.3;
const FREQUENCY_PENALTY: f32 = 0.1;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion response missing message content")]
    MalformedResponse,
}

/// Simple message format for the completion API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Seam over the external completion service so handlers and tests can
/// run against a scripted client instead of the live API.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CompletionError>;
}

/// OpenAI chat-completions client
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CompletionError> {
        debug!(
            "Sending completion request to {} (max_tokens={}, temperature={})",
            self.model, max_tokens, temperature
        );

        let messages = vec![Message::system(SYSTEM_INSTRUCTION), Message::user(prompt)];

        let request_body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": temperature,
            "presence_penalty": PRESENCE_PENALTY,
            "frequency_penalty": FREQUENCY_PENALTY,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::Api { status, body });
        }

        let response_body: Value = response.json().await?;
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(CompletionError::MalformedResponse)?;

        Ok(content.trim().to_string())
    }
}
