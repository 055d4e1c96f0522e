// src/api/http/mod.rs
// HTTP surface: five feature endpoints plus a liveness probe.

pub mod affirmation;
pub mod ascii;
pub mod fun;
pub mod health;
pub mod personality;
pub mod riddle;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::state::AppState;

/// Shared request body for the endpoints that only take a language.
#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: Option<String>,
}

impl LanguageRequest {
    /// `language` defaults to "english" when absent or null.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("english")
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/daily-affirmation", post(affirmation::daily_affirmation))
        .route("/api/random-fun", post(fun::random_fun))
        .route("/api/riddle", post(riddle::riddle))
        .route("/api/ascii-challenge", post(ascii::ascii_challenge))
        .route("/api/personality-insight", post(personality::personality_insight))
        .route("/health", get(health::liveness_check))
}
