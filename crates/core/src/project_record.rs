//! Public-facing projection of a HARP project record.

use serde::{Deserialize, Serialize};

use crate::types::{IrasId, RecId};

/// The subset of a project record that may leave the service.
///
/// Internal identifiers, the study decision and the registration and sync
/// timestamps are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecordData {
    pub iras_id: IrasId,
    pub rec_id: Option<RecId>,
    pub rec_name: Option<String>,
    pub short_project_title: Option<String>,
    pub long_project_title: Option<String>,
}
