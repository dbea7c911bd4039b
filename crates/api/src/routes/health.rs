use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database is reachable, `"degraded"` otherwise.
    pub status: &'static str,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = flowtrack_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse { status })
}

/// Mount health check routes (nested under `/api` by `api_routes()`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
