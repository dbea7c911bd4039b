//! Integration tests for the process/step repository layer.
//!
//! Exercises the repositories against a real database:
//! - Create defaults (generated id, progress 0, timestamps set)
//! - Partial update semantics
//! - Cascade delete behaviour (no orphaned steps)
//! - Completion toggle and progress recomputation
//! - Foreign key violation when stepping a nonexistent process

use assert_matches::assert_matches;
use sqlx::PgPool;

use flowtrack_db::models::process::{CreateProcess, UpdateProcess};
use flowtrack_db::models::process_step::CreateProcessStep;
use flowtrack_db::repositories::{ProcessRepo, ProcessStepRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_process(name: &str) -> CreateProcess {
    CreateProcess {
        name: Some(name.to_string()),
        description: None,
        department: Some("Compliance".to_string()),
        owner: Some("A".to_string()),
        status: Some("active".to_string()),
    }
}

fn new_step(name: &str, order: i32) -> CreateProcessStep {
    CreateProcessStep {
        name: Some(name.to_string()),
        description: None,
        assignee: Some("B".to_string()),
        estimated_time: Some("2h".to_string()),
        is_complete: None,
        sort_order: Some(order),
    }
}

// ---------------------------------------------------------------------------
// Test: Create defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_process_defaults(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("KYC Check"))
        .await
        .unwrap();

    assert!(!process.id.is_empty());
    assert_eq!(process.name, "KYC Check");
    assert_eq!(process.department, "Compliance");
    assert_eq!(process.status, "active");
    assert_eq!(process.progress, 0);
    assert!(process.description.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_step_defaults(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("AML Investigation"))
        .await
        .unwrap();

    let step = ProcessStepRepo::create(&pool, &process.id, &new_step("Collect documents", 1))
        .await
        .unwrap();

    assert_eq!(step.process_id.as_deref(), Some(process.id.as_str()));
    assert_eq!(step.name, "Collect documents");
    assert_eq!(step.sort_order, 1);
    assert!(!step.is_complete);
}

// ---------------------------------------------------------------------------
// Test: Round-trip through find_with_steps
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_step_round_trips(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("Round Trip"))
        .await
        .unwrap();
    let step = ProcessStepRepo::create(&pool, &process.id, &new_step("Only step", 1))
        .await
        .unwrap();

    let fetched = ProcessRepo::find_with_steps(&pool, &process.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.steps.len(), 1);
    assert_eq!(fetched.steps[0].id, step.id);
    assert_eq!(fetched.steps[0].name, "Only step");
    assert_eq!(fetched.steps[0].assignee.as_deref(), Some("B"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_steps_come_back_ordered(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("Ordered"))
        .await
        .unwrap();

    // Insert out of order; reads must sort ascending by sort_order.
    ProcessStepRepo::create(&pool, &process.id, &new_step("Third", 3))
        .await
        .unwrap();
    ProcessStepRepo::create(&pool, &process.id, &new_step("First", 1))
        .await
        .unwrap();
    ProcessStepRepo::create(&pool, &process.id, &new_step("Second", 2))
        .await
        .unwrap();

    let fetched = ProcessRepo::find_with_steps(&pool, &process.id)
        .await
        .unwrap()
        .unwrap();

    let names: Vec<_> = fetched.steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

// ---------------------------------------------------------------------------
// Test: Partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_process_touches_only_present_fields(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("Before"))
        .await
        .unwrap();

    let updated = ProcessRepo::update(
        &pool,
        &process.id,
        &UpdateProcess {
            name: Some("After".to_string()),
            description: None,
            department: None,
            owner: None,
            status: Some("paused".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.status, "paused");
    // Untouched fields survive.
    assert_eq!(updated.department, "Compliance");
    assert_eq!(updated.owner, "A");
    assert_eq!(updated.created_at, process.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_process_returns_none(pool: PgPool) {
    let result = ProcessRepo::update(
        &pool,
        "does-not-exist",
        &UpdateProcess {
            name: Some("X".to_string()),
            description: None,
            department: None,
            owner: None,
            status: None,
        },
    )
    .await
    .unwrap();

    assert_matches!(result, None);
}

// ---------------------------------------------------------------------------
// Test: Cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_process_cascades_to_steps(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("Doomed"))
        .await
        .unwrap();
    let step_ids: Vec<String> = {
        let mut ids = Vec::new();
        for i in 1..=3 {
            let step = ProcessStepRepo::create(&pool, &process.id, &new_step("Step", i))
                .await
                .unwrap();
            ids.push(step.id);
        }
        ids
    };

    let deleted = ProcessRepo::delete(&pool, &process.id).await.unwrap();
    assert!(deleted);

    assert_matches!(
        ProcessRepo::find_with_steps(&pool, &process.id).await.unwrap(),
        None
    );
    for id in step_ids {
        assert_matches!(ProcessStepRepo::find_by_id(&pool, &id).await.unwrap(), None);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_process_returns_false(pool: PgPool) {
    let deleted = ProcessRepo::delete(&pool, "does-not-exist").await.unwrap();
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Test: Completion toggle recomputes progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_recomputes_parent_progress(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("KYC Check"))
        .await
        .unwrap();
    let first = ProcessStepRepo::create(&pool, &process.id, &new_step("Verify identity", 1))
        .await
        .unwrap();
    let second = ProcessStepRepo::create(&pool, &process.id, &new_step("Screen sanctions", 2))
        .await
        .unwrap();

    let toggled = ProcessStepRepo::toggle_complete(&pool, &process.id, &first.id)
        .await
        .unwrap()
        .unwrap();
    assert!(toggled.is_complete);

    let fetched = ProcessRepo::find_with_steps(&pool, &process.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.process.progress, 50);

    ProcessStepRepo::toggle_complete(&pool, &process.id, &second.id)
        .await
        .unwrap()
        .unwrap();

    let fetched = ProcessRepo::find_with_steps(&pool, &process.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.process.progress, 100);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_back_lowers_progress(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &new_process("Reversible"))
        .await
        .unwrap();
    let step = ProcessStepRepo::create(&pool, &process.id, &new_step("Only step", 1))
        .await
        .unwrap();

    ProcessStepRepo::toggle_complete(&pool, &process.id, &step.id)
        .await
        .unwrap()
        .unwrap();
    let toggled_back = ProcessStepRepo::toggle_complete(&pool, &process.id, &step.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled_back.is_complete);

    let fetched = ProcessRepo::find_with_steps(&pool, &process.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.process.progress, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_requires_matching_process(pool: PgPool) {
    let owner = ProcessRepo::create(&pool, &new_process("Owner"))
        .await
        .unwrap();
    let other = ProcessRepo::create(&pool, &new_process("Other"))
        .await
        .unwrap();
    let step = ProcessStepRepo::create(&pool, &owner.id, &new_step("Step", 1))
        .await
        .unwrap();

    // Addressing the step through the wrong parent finds nothing.
    let result = ProcessStepRepo::toggle_complete(&pool, &other.id, &step.id)
        .await
        .unwrap();
    assert_matches!(result, None);
}

// ---------------------------------------------------------------------------
// Test: Constraint violations surface as opaque storage errors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_step_for_missing_process_fails(pool: PgPool) {
    let result = ProcessStepRepo::create(&pool, "does-not-exist", &new_step("Orphan", 1)).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Test: Full-collection listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_with_steps_groups_by_process(pool: PgPool) {
    let first = ProcessRepo::create(&pool, &new_process("First"))
        .await
        .unwrap();
    let second = ProcessRepo::create(&pool, &new_process("Second"))
        .await
        .unwrap();

    ProcessStepRepo::create(&pool, &first.id, &new_step("A", 1))
        .await
        .unwrap();
    ProcessStepRepo::create(&pool, &first.id, &new_step("B", 2))
        .await
        .unwrap();
    ProcessStepRepo::create(&pool, &second.id, &new_step("C", 1))
        .await
        .unwrap();

    let all = ProcessRepo::list_with_steps(&pool).await.unwrap();
    assert_eq!(all.len(), 2);

    let by_id = |id: &str| all.iter().find(|p| p.process.id == id).unwrap();
    assert_eq!(by_id(&first.id).steps.len(), 2);
    assert_eq!(by_id(&second.id).steps.len(), 1);
}
