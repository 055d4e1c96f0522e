// src/config/llm.rs
// OpenAI completion API configuration

use serde::{Deserialize, Serialize};

/// OpenAI configuration for the completion gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: super::helpers::env_or("OPENAI_API_KEY", ""),
            model: super::helpers::env_or("OPENAI_MODEL", "gpt-4o"),
            base_url: super::helpers::env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            return Err(anyhow::anyhow!("OPENAI_API_KEY is not set"));
        }

        Ok(())
    }
}
