// src/config/mod.rs
// Central configuration for the Serendipity backend

pub mod helpers;
pub mod llm;
pub mod server;

use serde::{Deserialize, Serialize};

/// Main configuration structure - composed once at startup and passed
/// explicitly into the application state, never read as ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub openai: llm::OpenAiConfig,
    pub server: server::ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Load .env file
        dotenv::dotenv().ok(); // Don't panic if .env doesn't exist (for production)

        Self {
            openai: llm::OpenAiConfig::from_env(),
            server: server::ServerConfig::from_env(),
        }
    }

    /// Validate config on startup. A missing API credential is fatal.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.openai.validate()?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}
