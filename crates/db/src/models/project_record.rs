//! HARP project record row model.

use iras_core::project_record::ProjectRecordData;
use iras_core::types::{IrasId, RecId, Timestamp};
use sqlx::FromRow;

/// A row from the `harp_project_records` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProjectRecord {
    /// Store-generated opaque key. Never exposed to callers.
    pub id: String,
    pub iras_id: IrasId,
    pub rec_id: Option<RecId>,
    pub rec_name: Option<String>,
    pub short_study_title: Option<String>,
    pub study_decision: Option<String>,
    pub date_registered: Timestamp,
    pub full_research_title: Option<String>,
    /// When the upstream sync last refreshed this row.
    pub last_sync_date: Timestamp,
}

impl From<ProjectRecord> for ProjectRecordData {
    fn from(record: ProjectRecord) -> Self {
        Self {
            iras_id: record.iras_id,
            rec_id: record.rec_id,
            rec_name: record.rec_name,
            short_project_title: record.short_study_title,
            long_project_title: record.full_research_title,
        }
    }
}
