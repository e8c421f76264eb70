//! Response envelope for the IRAS ID validation endpoint.
//!
//! Every outcome of the endpoint, success or not, is a [`ValidationResponse`].
//! The constructors are the only way to build one, so `error` is set exactly
//! when the status is not `success` and `data` exactly when it is.

use axum::http::StatusCode;
use iras_core::iras_id::{not_found_message, INVALID_IRAS_ID_MESSAGE};
use iras_core::project_record::ProjectRecordData;
use iras_core::types::{IrasId, Timestamp};
use serde::{Deserialize, Serialize};

/// Outcome tag carried in the envelope's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationStatus {
    Success,
    NotFound,
    BadRequest,
}

impl ValidationStatus {
    /// HTTP status code paired with this outcome.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub status: ValidationStatus,
    /// When the request was handled, independent of the record's own dates.
    pub time_stamp: Timestamp,
    pub error: Option<String>,
    pub data: Option<ProjectRecordData>,
}

impl ValidationResponse {
    pub fn success(data: ProjectRecordData, time_stamp: Timestamp) -> Self {
        Self {
            status: ValidationStatus::Success,
            time_stamp,
            error: None,
            data: Some(data),
        }
    }

    pub fn not_found(iras_id: IrasId, time_stamp: Timestamp) -> Self {
        Self {
            status: ValidationStatus::NotFound,
            time_stamp,
            error: Some(not_found_message(iras_id)),
            data: None,
        }
    }

    pub fn bad_request(time_stamp: Timestamp) -> Self {
        Self {
            status: ValidationStatus::BadRequest,
            time_stamp,
            error: Some(INVALID_IRAS_ID_MESSAGE.to_string()),
            data: None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status.status_code()
    }
}
