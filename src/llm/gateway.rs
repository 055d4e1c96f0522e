// src/llm/gateway.rs
// Failure-absorbing wrapper around a CompletionClient.

use std::sync::Arc;
use tracing::warn;

use super::provider::CompletionClient;

/// Served verbatim whenever the external call fails. Clients always get a
/// 200 with this sentence instead of an error.
pub const FALLBACK_SENTENCE: &str =
    "Something magical went wrong, but you are still amazing! ✨";

/// The sole integration point with the external generation service.
/// `generate` never fails; any client error is logged and replaced with
/// the fallback sentence.
#[derive(Clone)]
pub struct CompletionGateway {
    client: Arc<dyn CompletionClient>,
}

impl CompletionGateway {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, prompt: &str, max_tokens: u32, temperature: f32) -> String {
        match self.client.complete(prompt, max_tokens, temperature).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Completion call failed, serving fallback: {}", e);
                FALLBACK_SENTENCE.to_string()
            }
        }
    }
}
