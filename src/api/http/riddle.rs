// src/api/http/riddle.rs

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use super::LanguageRequest;
use crate::parse::parse_riddle;
use crate::prompt::riddle_prompt;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RiddleResponse {
    pub question: String,
    pub answer: String,
}

/// POST /api/riddle
pub async fn riddle(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LanguageRequest>,
) -> Json<RiddleResponse> {
    let prompt = riddle_prompt(req.language());
    let raw = state.gateway.generate(&prompt, 60, 0.7).await;

    let parsed = parse_riddle(&raw);
    Json(RiddleResponse {
        question: parsed.question,
        answer: parsed.answer,
    })
}
