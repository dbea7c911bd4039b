//! Process model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use flowtrack_core::process::ProcessStatus;
use flowtrack_core::types::Timestamp;

use crate::models::process_step::ProcessStep;

/// A row from the `processes` table.
///
/// `progress` is derived from the step set and recomputed on every step
/// toggle; it is never accepted from the client.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub department: String,
    pub owner: String,
    pub status: String,
    pub last_run: Timestamp,
    pub progress: i32,
    pub created_at: Timestamp,
}

/// A process together with its steps, ordered ascending by `sort_order`.
#[derive(Debug, Serialize)]
pub struct ProcessWithSteps {
    #[serde(flatten)]
    pub process: Process,
    pub steps: Vec<ProcessStep>,
}

/// DTO for creating a new process.
///
/// Required fields are `Option` so a missing key surfaces as a field-level
/// validation error (400) instead of a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcess {
    #[validate(required(message = "Required"), length(min = 1, message = "Cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required(message = "Required"), length(min = 1, message = "Cannot be empty"))]
    pub department: Option<String>,
    #[validate(required(message = "Required"), length(min = 1, message = "Cannot be empty"))]
    pub owner: Option<String>,
    #[validate(required(message = "Required"), custom(function = status_is_known))]
    pub status: Option<String>,
}

/// DTO for partially updating a process. Absent fields are left untouched.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcess {
    #[validate(length(min = 1, message = "Cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Cannot be empty"))]
    pub department: Option<String>,
    #[validate(length(min = 1, message = "Cannot be empty"))]
    pub owner: Option<String>,
    #[validate(custom(function = status_is_known))]
    pub status: Option<String>,
}

/// Validator hook: the status string must belong to the closed enumeration.
fn status_is_known(value: &str) -> Result<(), ValidationError> {
    match ProcessStatus::parse(value) {
        Ok(_) => Ok(()),
        Err(parse_err) => {
            let mut err = ValidationError::new("unknown_status");
            err.message = Some(parse_err.to_string().into());
            Err(err)
        }
    }
}
