//! Lookup service for HARP project records.

use std::sync::Arc;

use async_trait::async_trait;
use iras_core::project_record::ProjectRecordData;
use iras_core::types::IrasId;
use iras_db::repositories::ProjectRecordStore;

use crate::error::AppResult;

/// Resolves an IRAS ID to its public record projection.
#[async_trait]
pub trait ProjectRecordLookup: Send + Sync {
    /// `Ok(None)` when no record exists. Store failures are returned as
    /// [`AppError::Database`](crate::error::AppError::Database).
    async fn get_record_by_iras_id(&self, iras_id: IrasId)
        -> AppResult<Option<ProjectRecordData>>;
}

/// Default [`ProjectRecordLookup`] over any [`ProjectRecordStore`].
#[derive(Clone)]
pub struct ProjectRecordService {
    store: Arc<dyn ProjectRecordStore>,
}

impl ProjectRecordService {
    pub fn new(store: Arc<dyn ProjectRecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRecordLookup for ProjectRecordService {
    async fn get_record_by_iras_id(
        &self,
        iras_id: IrasId,
    ) -> AppResult<Option<ProjectRecordData>> {
        tracing::info!(iras_id, "Fetching record for IRAS ID");

        let record = self.store.fetch_by_iras_id(iras_id).await?;
        Ok(record.map(ProjectRecordData::from))
    }
}
