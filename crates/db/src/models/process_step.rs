//! Process step model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `process_steps` table.
///
/// `sort_order` is serialized as `order` on the wire. The backend accepts
/// arbitrary order values; uniqueness is not enforced and sorting is
/// ascending by this field.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: String,
    pub process_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub estimated_time: Option<String>,
    pub is_complete: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// DTO for creating a step. The parent process id comes from the URL path,
/// not the body. Assignee and estimated time are optional at the storage
/// schema; only the form layer treats them as required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessStep {
    #[validate(required(message = "Required"), length(min = 1, message = "Cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub estimated_time: Option<String>,
    pub is_complete: Option<bool>,
    #[serde(rename = "order")]
    #[validate(required(message = "Required"))]
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a step. Absent fields are left untouched.
///
/// Setting `is_complete` here does NOT recompute the parent's progress;
/// only the toggle operation maintains that invariant.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessStep {
    #[validate(length(min = 1, message = "Cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub estimated_time: Option<String>,
    pub is_complete: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}
