// src/api/http/health.rs

use axum::{Json, http::StatusCode, response::IntoResponse};

/// Liveness probe - simple ping to verify the server is running.
///
/// GET /health
pub async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "alive"})))
}
