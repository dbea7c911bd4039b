//! Handlers for process step CRUD and the completion toggle.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use flowtrack_core::error::CoreError;
use flowtrack_db::models::process_step::{CreateProcessStep, UpdateProcessStep};
use flowtrack_db::repositories::ProcessStepRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /processes/{process_id}/steps
///
/// Create a step under the given process. Each step insert is an
/// independent request; there is no multi-step atomicity, so a client
/// that fails partway through authoring leaves a partially populated
/// process behind.
pub async fn create_step(
    State(state): State<AppState>,
    Path(process_id): Path<String>,
    Json(input): Json<CreateProcessStep>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|errors| AppError::Validation {
        message: "Invalid step data",
        errors,
    })?;

    let step = ProcessStepRepo::create(&state.pool, &process_id, &input).await?;

    tracing::info!(
        step_id = %step.id,
        process_id = %process_id,
        "Process step created"
    );

    Ok((StatusCode::CREATED, Json(step)))
}

/// PUT /steps/{id}
///
/// Partial update. Setting `isComplete` here does not recompute the
/// parent's progress; only the toggle endpoint maintains that invariant.
pub async fn update_step(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProcessStep>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|errors| AppError::Validation {
        message: "Invalid step data",
        errors,
    })?;

    let step = ProcessStepRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Process step",
        }))?;

    tracing::info!(step_id = %id, "Process step updated");

    Ok(Json(step))
}

/// PATCH /processes/{process_id}/steps/{step_id}/toggle
///
/// Flip the step's completion flag and recompute the parent's progress
/// from the full current step set.
pub async fn toggle_step(
    State(state): State<AppState>,
    Path((process_id, step_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let step = ProcessStepRepo::toggle_complete(&state.pool, &process_id, &step_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Process step",
        }))?;

    tracing::info!(
        step_id = %step.id,
        process_id = %process_id,
        is_complete = step.is_complete,
        "Process step completion toggled"
    );

    Ok(Json(step))
}

/// DELETE /steps/{id}
pub async fn delete_step(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProcessStepRepo::delete(&state.pool, &id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Process step",
        }));
    }

    tracing::info!(step_id = %id, "Process step deleted");

    Ok(StatusCode::NO_CONTENT)
}
