//! Repository for the `harp_project_records` table.

use async_trait::async_trait;
use iras_core::types::IrasId;
use sqlx::PgPool;

use crate::models::project_record::ProjectRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, iras_id, rec_id, rec_name, short_study_title, study_decision, \
     date_registered, full_research_title, last_sync_date";

/// Read access to project records keyed by IRAS ID.
///
/// `Ok(None)` means the store answered and holds no such record. Any failure
/// to reach or query the store is an `Err`.
#[async_trait]
pub trait ProjectRecordStore: Send + Sync {
    async fn fetch_by_iras_id(&self, iras_id: IrasId)
        -> Result<Option<ProjectRecord>, sqlx::Error>;
}

/// Postgres-backed project record repository.
#[derive(Clone)]
pub struct ProjectRecordRepo {
    pool: PgPool,
}

impl ProjectRecordRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the record for `iras_id`. The unique index on `iras_id`
    /// guarantees at most one match.
    pub async fn find_by_iras_id(
        pool: &PgPool,
        iras_id: IrasId,
    ) -> Result<Option<ProjectRecord>, sqlx::Error> {
        tracing::debug!(iras_id, "Querying harp_project_records by IRAS ID");
        let query = format!("SELECT {COLUMNS} FROM harp_project_records WHERE iras_id = $1");
        sqlx::query_as::<_, ProjectRecord>(&query)
            .bind(iras_id)
            .fetch_optional(pool)
            .await
    }
}

#[async_trait]
impl ProjectRecordStore for ProjectRecordRepo {
    async fn fetch_by_iras_id(
        &self,
        iras_id: IrasId,
    ) -> Result<Option<ProjectRecord>, sqlx::Error> {
        Self::find_by_iras_id(&self.pool, iras_id).await
    }
}
