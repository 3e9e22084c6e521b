use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;

#[derive(Serialize, Default)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// GET /api/health
///
/// Liveness probe; requires no authentication.
pub async fn health() -> impl IntoResponse {
    let data = HealthResponse {
        status: "ok".into(),
        service: util::config::project_name(),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Service is healthy")),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}
