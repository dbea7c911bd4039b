//! Route definitions for directly-addressed steps.
//!
//! Mounted at `/steps` by `api_routes()`. Step creation and the completion
//! toggle live under `/processes` (see [`crate::routes::process`]).

use axum::routing::put;
use axum::Router;

use crate::handlers::process_step;
use crate::state::AppState;

/// Step routes.
///
/// ```text
/// PUT    /{id} -> update_step
/// DELETE /{id} -> delete_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(process_step::update_step).delete(process_step::delete_step),
    )
}
