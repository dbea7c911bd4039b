//! Repository for the `processes` table.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::process::{CreateProcess, Process, ProcessWithSteps, UpdateProcess};
use crate::models::process_step::ProcessStep;
use crate::repositories::process_step_repo::ProcessStepRepo;

/// Column list for `processes` queries.
const COLUMNS: &str =
    "id, name, description, department, owner, status, last_run, progress, created_at";

/// Provides CRUD operations for processes and their step collections.
pub struct ProcessRepo;

impl ProcessRepo {
    /// List all processes, each with its steps ordered ascending by
    /// `sort_order`. Full scan, no pagination.
    pub async fn list_with_steps(pool: &PgPool) -> Result<Vec<ProcessWithSteps>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes ORDER BY created_at ASC");
        let processes = sqlx::query_as::<_, Process>(&query).fetch_all(pool).await?;

        let steps = ProcessStepRepo::list_all(pool).await?;
        let mut by_process: HashMap<String, Vec<ProcessStep>> = HashMap::new();
        for step in steps {
            if let Some(process_id) = step.process_id.clone() {
                by_process.entry(process_id).or_default().push(step);
            }
        }

        Ok(processes
            .into_iter()
            .map(|process| {
                let steps = by_process.remove(&process.id).unwrap_or_default();
                ProcessWithSteps { process, steps }
            })
            .collect())
    }

    /// Find one process with its ordered steps.
    pub async fn find_with_steps(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<ProcessWithSteps>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes WHERE id = $1");
        let process = sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(process) = process else {
            return Ok(None);
        };

        let steps = ProcessStepRepo::list_by_process(pool, &process.id).await?;
        Ok(Some(ProcessWithSteps { process, steps }))
    }

    /// Create a new process, returning the created row.
    ///
    /// `last_run`, `progress`, and `created_at` come from column defaults.
    pub async fn create(pool: &PgPool, input: &CreateProcess) -> Result<Process, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO processes (id, name, description, department, owner, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(&id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.department.as_deref())
            .bind(input.owner.as_deref())
            .bind(input.status.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Partial update by ID, returning the updated row. Last write wins;
    /// there is no conflict detection.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProcess,
    ) -> Result<Option<Process>, sqlx::Error> {
        let query = format!(
            "UPDATE processes SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                department = COALESCE($4, department),
                owner = COALESCE($5, owner),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.department.as_deref())
            .bind(input.owner.as_deref())
            .bind(input.status.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a process and all of its steps in one transaction.
    /// Returns `true` if a process row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM process_steps WHERE process_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM processes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
