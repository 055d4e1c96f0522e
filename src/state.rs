// src/state.rs
// Application state shared across handlers

use crate::llm::CompletionGateway;

/// Shared, read-only state: the completion gateway is the only per-request
/// collaborator. Constructed once at startup from an explicit config.
#[derive(Clone)]
pub struct AppState {
    pub gateway: CompletionGateway,
}

impl AppState {
    pub fn new(gateway: CompletionGateway) -> Self {
        Self { gateway }
    }
}
