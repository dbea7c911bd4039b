pub mod dashboard;
pub mod health;
pub mod process;
pub mod process_step;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          liveness check
///
/// /processes                                       list, create
/// /processes/{id}                                  get, update, delete (cascade)
/// /processes/{process_id}/steps                    create step
/// /processes/{process_id}/steps/{step_id}/toggle   flip completion + recompute progress
///
/// /steps/{id}                                      update, delete
///
/// /dashboard/metrics                               aggregate stats
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/processes", process::router())
        .nest("/steps", process_step::router())
        .nest("/dashboard", dashboard::router())
}
