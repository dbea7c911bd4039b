//! Dashboard metrics handler.
//!
//! Metrics are computed on demand from the full process collection. Nothing
//! is cached or incrementally maintained; correctness depends only on the
//! storage layer returning a consistent snapshot per call.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use flowtrack_core::process::ProcessStatus;
use flowtrack_core::progress::completion_percent;
use flowtrack_db::models::process::ProcessWithSteps;
use flowtrack_db::repositories::ProcessRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Summary statistics over all processes and their steps.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_processes: usize,
    pub active_processes: usize,
    pub completed_processes: usize,
    pub overdue_processes: usize,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub avg_completion_rate: i32,
}

/// GET /dashboard/metrics
pub async fn metrics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let processes = ProcessRepo::list_with_steps(&state.pool).await?;
    Ok(Json(compute_metrics(&processes)))
}

/// Single scan over the collection; O(processes × steps).
fn compute_metrics(processes: &[ProcessWithSteps]) -> DashboardMetrics {
    let count_by_status = |status: ProcessStatus| {
        processes
            .iter()
            .filter(|p| p.process.status == status.as_str())
            .count()
    };

    let completed_tasks: usize = processes
        .iter()
        .map(|p| p.steps.iter().filter(|s| s.is_complete).count())
        .sum();
    let total_tasks: usize = processes.iter().map(|p| p.steps.len()).sum();

    DashboardMetrics {
        total_processes: processes.len(),
        active_processes: count_by_status(ProcessStatus::Active),
        completed_processes: count_by_status(ProcessStatus::Completed),
        overdue_processes: count_by_status(ProcessStatus::Overdue),
        completed_tasks,
        total_tasks,
        avg_completion_rate: completion_percent(completed_tasks, total_tasks).unwrap_or(0),
    }
}
