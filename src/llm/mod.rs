// src/llm/mod.rs
// Completion gateway - the single integration boundary to the external
// text-generation service.

pub mod gateway;
pub mod provider;

pub use gateway::{CompletionGateway, FALLBACK_SENTENCE};
pub use provider::{CompletionClient, CompletionError, Message, OpenAiClient, SYSTEM_INSTRUCTION};
