//! Integration tests for the project record repository.
//!
//! Exercises the repository against a real database:
//! - Full row retrieval, including the internal-only columns
//! - Rows with every optional column null
//! - Absence of a matching row
//! - The unique constraint on `iras_id`
//! - Store failures surfacing as errors rather than absence

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use iras_db::repositories::{ProjectRecordRepo, ProjectRecordStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed(pool: &PgPool) {
    sqlx::query(
        "INSERT INTO harp_project_records
            (id, iras_id, rec_id, rec_name, short_study_title, study_decision,
             date_registered, full_research_title, last_sync_date)
         VALUES
            ('abc123', 45655, 789, 'Dr. Test', 'Short Title', 'Approved',
             '2023-05-10T00:00:00Z', 'Full Title of the Research Study', '2024-01-01T12:00:00Z'),
            ('def456', 99955, NULL, NULL, NULL, NULL,
             '2022-01-01T00:00:00Z', NULL, '2024-01-01T12:00:00Z')",
    )
    .execute(pool)
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn returns_full_record(pool: PgPool) {
    seed(&pool).await;

    let record = ProjectRecordRepo::find_by_iras_id(&pool, 45655)
        .await
        .unwrap()
        .expect("record should exist");

    assert_eq!(record.id, "abc123");
    assert_eq!(record.iras_id, 45655);
    assert_eq!(record.rec_id, Some(789));
    assert_eq!(record.rec_name.as_deref(), Some("Dr. Test"));
    assert_eq!(record.short_study_title.as_deref(), Some("Short Title"));
    assert_eq!(record.study_decision.as_deref(), Some("Approved"));
    assert_eq!(
        record.date_registered,
        Utc.with_ymd_and_hms(2023, 5, 10, 0, 0, 0).unwrap()
    );
    assert_eq!(
        record.full_research_title.as_deref(),
        Some("Full Title of the Research Study")
    );
    assert_eq!(
        record.last_sync_date,
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn returns_record_with_null_optionals(pool: PgPool) {
    seed(&pool).await;

    let record = ProjectRecordRepo::find_by_iras_id(&pool, 99955)
        .await
        .unwrap()
        .expect("record should exist");

    assert_eq!(record.id, "def456");
    assert_eq!(record.rec_id, None);
    assert_eq!(record.rec_name, None);
    assert_eq!(record.short_study_title, None);
    assert_eq!(record.study_decision, None);
    assert_eq!(record.full_research_title, None);
    assert_eq!(
        record.date_registered,
        Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn returns_none_when_not_found(pool: PgPool) {
    seed(&pool).await;

    let record = ProjectRecordRepo::find_by_iras_id(&pool, 9_999_999)
        .await
        .unwrap();

    assert_eq!(record, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_trait_delegates_to_query(pool: PgPool) {
    seed(&pool).await;
    let repo = ProjectRecordRepo::new(pool);

    let found = repo.fetch_by_iras_id(45655).await.unwrap();
    let missing = repo.fetch_by_iras_id(1).await.unwrap();

    assert_eq!(found.map(|r| r.id), Some("abc123".to_string()));
    assert_eq!(missing, None);
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn id_is_generated_when_omitted(pool: PgPool) {
    sqlx::query(
        "INSERT INTO harp_project_records (iras_id, date_registered) VALUES (12345, NOW())",
    )
    .execute(&pool)
    .await
    .unwrap();

    let record = ProjectRecordRepo::find_by_iras_id(&pool, 12345)
        .await
        .unwrap()
        .expect("record should exist");

    assert!(!record.id.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_iras_id_is_rejected(pool: PgPool) {
    seed(&pool).await;

    let result = sqlx::query(
        "INSERT INTO harp_project_records (iras_id, date_registered) VALUES (45655, NOW())",
    )
    .execute(&pool)
    .await;

    assert_matches!(result, Err(sqlx::Error::Database(db_err)) => {
        assert_eq!(db_err.code().as_deref(), Some("23505"));
        assert_eq!(db_err.constraint(), Some("uq_harp_project_records_iras_id"));
    });
}

// ---------------------------------------------------------------------------
// Failure surfacing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn closed_pool_surfaces_error_not_absence(pool: PgPool) {
    let repo = ProjectRecordRepo::new(pool.clone());
    pool.close().await;

    let result = repo.fetch_by_iras_id(45655).await;

    assert_matches!(result, Err(sqlx::Error::PoolClosed));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_passes(pool: PgPool) {
    iras_db::health_check(&pool).await.unwrap();
}
