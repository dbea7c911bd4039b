//! Repository for the `process_steps` table.

use sqlx::PgPool;
use uuid::Uuid;

use flowtrack_core::progress::completion_percent;

use crate::models::process_step::{CreateProcessStep, ProcessStep, UpdateProcessStep};

/// Column list for `process_steps` queries.
const COLUMNS: &str =
    "id, process_id, name, description, assignee, estimated_time, is_complete, sort_order";

/// Provides CRUD operations for process steps, plus the completion toggle
/// that maintains the parent's derived `progress`.
pub struct ProcessStepRepo;

impl ProcessStepRepo {
    /// Create a new step under the given process, returning the created row.
    ///
    /// A nonexistent `process_id` surfaces as the underlying foreign-key
    /// violation; no implicit correction is performed here.
    pub async fn create(
        pool: &PgPool,
        process_id: &str,
        input: &CreateProcessStep,
    ) -> Result<ProcessStep, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO process_steps
                (id, process_id, name, description, assignee, estimated_time, is_complete, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(&id)
            .bind(process_id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.assignee.as_deref())
            .bind(input.estimated_time.as_deref())
            .bind(input.is_complete)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a step by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<ProcessStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM process_steps WHERE id = $1");
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the steps of one process, ordered ascending by `sort_order`.
    pub async fn list_by_process(
        pool: &PgPool,
        process_id: &str,
    ) -> Result<Vec<ProcessStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM process_steps
             WHERE process_id = $1
             ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(process_id)
            .fetch_all(pool)
            .await
    }

    /// List every step, ordered ascending by `sort_order`. Used by the
    /// full-collection scan in [`crate::repositories::ProcessRepo`].
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProcessStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM process_steps ORDER BY sort_order ASC");
        sqlx::query_as::<_, ProcessStep>(&query).fetch_all(pool).await
    }

    /// Partial update by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProcessStep,
    ) -> Result<Option<ProcessStep>, sqlx::Error> {
        let query = format!(
            "UPDATE process_steps SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                assignee = COALESCE($4, assignee),
                estimated_time = COALESCE($5, estimated_time),
                is_complete = COALESCE($6, is_complete),
                sort_order = COALESCE($7, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProcessStep>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.assignee.as_deref())
            .bind(input.estimated_time.as_deref())
            .bind(input.is_complete)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a step by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM process_steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flip `is_complete` on the step matching both ids, then recompute and
    /// persist the parent's `progress` from the full current step set, all in
    /// one transaction. Returns `None` when no such step exists under the
    /// given process.
    ///
    /// The recompute reads every step of the process (not just the toggled
    /// one) so the stored percentage cannot drift. An empty step set skips
    /// the progress write entirely.
    pub async fn toggle_complete(
        pool: &PgPool,
        process_id: &str,
        step_id: &str,
    ) -> Result<Option<ProcessStep>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let toggle = format!(
            "UPDATE process_steps SET is_complete = NOT is_complete
             WHERE id = $1 AND process_id = $2
             RETURNING {COLUMNS}"
        );
        let step = sqlx::query_as::<_, ProcessStep>(&toggle)
            .bind(step_id)
            .bind(process_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(step) = step else {
            return Ok(None);
        };

        let select = format!("SELECT {COLUMNS} FROM process_steps WHERE process_id = $1");
        let steps = sqlx::query_as::<_, ProcessStep>(&select)
            .bind(process_id)
            .fetch_all(&mut *tx)
            .await?;

        let completed = steps.iter().filter(|s| s.is_complete).count();
        if let Some(progress) = completion_percent(completed, steps.len()) {
            sqlx::query("UPDATE processes SET progress = $2 WHERE id = $1")
                .bind(process_id)
                .bind(progress)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(Some(step))
    }
}
