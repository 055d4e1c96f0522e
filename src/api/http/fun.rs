// src/api/http/fun.rs

use axum::{Json, extract::State};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

use super::LanguageRequest;
use crate::prompt::{FUN_KINDS, fun_prompt};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RandomFunResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub emoji: String,
}

/// POST /api/random-fun
///
/// One of the three templates (joke, compliment, art) is drawn uniformly
/// per request; the returned tag and emoji always match the drawn template.
pub async fn random_fun(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LanguageRequest>,
) -> Json<RandomFunResponse> {
    let kind = FUN_KINDS[rand::rng().random_range(0..FUN_KINDS.len())];

    let prompt = fun_prompt(kind, req.language());
    let content = state.gateway.generate(&prompt, 80, 0.8).await;

    Json(RandomFunResponse {
        kind: kind.as_str().to_string(),
        content,
        emoji: kind.emoji().to_string(),
    })
}
