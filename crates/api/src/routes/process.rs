//! Route definitions for processes and their nested step operations.
//!
//! Mounted at `/processes` by `api_routes()`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{process, process_step};
use crate::state::AppState;

/// Process routes.
///
/// ```text
/// GET    /                                    -> list_processes
/// POST   /                                    -> create_process
/// GET    /{id}                                -> get_process
/// PUT    /{id}                                -> update_process
/// DELETE /{id}                                -> delete_process
/// POST   /{process_id}/steps                  -> create_step
/// PATCH  /{process_id}/steps/{step_id}/toggle -> toggle_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(process::list_processes).post(process::create_process),
        )
        .route(
            "/{id}",
            get(process::get_process)
                .put(process::update_process)
                .delete(process::delete_process),
        )
        .route("/{process_id}/steps", post(process_step::create_step))
        .route(
            "/{process_id}/steps/{step_id}/toggle",
            patch(process_step::toggle_step),
        )
}
