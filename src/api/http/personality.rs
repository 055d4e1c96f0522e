// src/api/http/personality.rs

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::parse::{confidence_score, parse_personality};
use crate::prompt::builders::personality_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PersonalityRequest {
    pub input: String,
    pub language: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonalityResponse {
    pub insight: String,
    pub traits: Vec<String>,
    pub personality_type: String,
    pub share_text: String,
    pub confidence_score: f64,
}

/// POST /api/personality-insight
///
/// The only endpoint with boundary validation: an empty or whitespace-only
/// input is rejected before any completion call is made.
pub async fn personality_insight(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PersonalityRequest>,
) -> Result<Json<PersonalityResponse>, ApiError> {
    if req.input.trim().is_empty() {
        return Err(ApiError::EmptyInput);
    }

    let language = req.language.as_deref().unwrap_or("english");
    let prompt = personality_prompt(&req.input, language, req.context.as_deref());
    let raw = state.gateway.generate(&prompt, 300, 0.7).await;

    let profile = parse_personality(&raw);
    let share_text = format!(
        "I just discovered I'm {}! 🌟 What's your AI personality type?",
        profile.personality_type
    );

    Ok(Json(PersonalityResponse {
        insight: profile.insight,
        traits: profile.traits,
        personality_type: profile.personality_type,
        share_text,
        confidence_score: confidence_score(&req.input),
    }))
}

#[derive(Debug)]
pub enum ApiError {
    EmptyInput,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::EmptyInput => (StatusCode::BAD_REQUEST, "Input cannot be empty"),
        };

        warn!("Request rejected: {}", message);

        (
            status,
            Json(serde_json::json!({
                "error": message
            })),
        )
            .into_response()
    }
}
