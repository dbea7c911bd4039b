//! Handlers for process CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use flowtrack_core::error::CoreError;
use flowtrack_db::models::process::{CreateProcess, UpdateProcess};
use flowtrack_db::repositories::ProcessRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /processes
///
/// List all processes with their ordered steps.
pub async fn list_processes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let processes = ProcessRepo::list_with_steps(&state.pool).await?;
    Ok(Json(processes))
}

/// GET /processes/{id}
///
/// Fetch a single process with its ordered steps.
pub async fn get_process(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let process = ProcessRepo::find_with_steps(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Process" }))?;

    Ok(Json(process))
}

/// POST /processes
///
/// Create a new process. Steps are added through follow-up requests.
pub async fn create_process(
    State(state): State<AppState>,
    Json(input): Json<CreateProcess>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|errors| AppError::Validation {
        message: "Invalid process data",
        errors,
    })?;

    let process = ProcessRepo::create(&state.pool, &input).await?;

    tracing::info!(
        process_id = %process.id,
        name = %process.name,
        department = %process.department,
        "Process created"
    );

    Ok((StatusCode::CREATED, Json(process)))
}

/// PUT /processes/{id}
///
/// Partial update. Absent fields are left untouched; last write wins.
pub async fn update_process(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProcess>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|errors| AppError::Validation {
        message: "Invalid process data",
        errors,
    })?;

    let process = ProcessRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Process" }))?;

    tracing::info!(process_id = %id, "Process updated");

    Ok(Json(process))
}

/// DELETE /processes/{id}
///
/// Delete a process and cascade to its steps.
pub async fn delete_process(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProcessRepo::delete(&state.pool, &id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Process" }));
    }

    tracing::info!(process_id = %id, "Process deleted");

    Ok(StatusCode::NO_CONTENT)
}
