// src/api/http/affirmation.rs

use axum::{Json, extract::State};
use chrono::{Local, Timelike};
use serde::Serialize;
use std::sync::Arc;

use super::LanguageRequest;
use crate::prompt::{affirmation_prompt, time_context_for_hour};
use crate::seed::{daily_seed, mood_color_for_seed, visual_for_seed};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AffirmationResponse {
    pub affirmation: String,
    pub visual_element: String,
    pub date: String,
    pub mood_color: String,
}

/// POST /api/daily-affirmation
///
/// The emoji and mood color come from the daily seed, so they stay fixed
/// for the whole calendar day regardless of what the model returns.
pub async fn daily_affirmation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LanguageRequest>,
) -> Json<AffirmationResponse> {
    let now = Local::now();
    let today = now.format("%Y-%m-%d").to_string();
    let day_of_week = now.format("%A").to_string();
    let time_context = time_context_for_hour(now.hour());
    let seed = daily_seed(&today);

    let prompt = affirmation_prompt(req.language(), time_context, &day_of_week, &seed);
    let affirmation = state.gateway.generate(&prompt, 150, 0.7).await;

    Json(AffirmationResponse {
        affirmation,
        visual_element: visual_for_seed(&seed).to_string(),
        date: today,
        mood_color: mood_color_for_seed(&seed).to_string(),
    })
}
