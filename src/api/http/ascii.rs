// src/api/http/ascii.rs

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use super::LanguageRequest;
use crate::parse::parse_ascii;
use crate::prompt::ascii_prompt;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AsciiChallengeResponse {
    pub ascii_art: String,
    pub answer: String,
}

/// POST /api/ascii-challenge
pub async fn ascii_challenge(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LanguageRequest>,
) -> Json<AsciiChallengeResponse> {
    let prompt = ascii_prompt(req.language());
    let raw = state.gateway.generate(&prompt, 150, 0.6).await;

    let parsed = parse_ascii(&raw);
    Json(AsciiChallengeResponse {
        ascii_art: parsed.ascii_art,
        answer: parsed.answer,
    })
}
