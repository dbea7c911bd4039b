//! Route definitions for dashboard aggregation.
//!
//! Mounted at `/dashboard` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes.
///
/// ```text
/// GET /metrics -> metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(dashboard::metrics))
}
