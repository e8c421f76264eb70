//! Handler for the `/projectrecord/validate` endpoint.

use axum::extract::rejection::QueryRejection;
use axum::extract::{OriginalUri, Query, State};
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::Json;
use chrono::Utc;
use iras_core::iras_id;

use crate::error::AppResult;
use crate::response::ValidationResponse;
use crate::state::AppState;

/// GET /api/projectrecord/validate?irasId={integer}
///
/// - 200 with the public record projection when a record exists
/// - 400 when `irasId` is missing, repeated, or not an integer
/// - 404 when no record matches
///
/// Store failures are not handled here and surface as a 500 via
/// [`AppError`](crate::error::AppError).
pub async fn validate(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<(StatusCode, Json<ValidationResponse>)> {
    let now = Utc::now();

    // Query order is preserved so repeated keys are seen, not collapsed.
    let params = query.map(|Query(params)| params).unwrap_or_default();

    let parsed = iras_id::find_param(&params, state.config.iras_id_case_insensitive)
        .and_then(iras_id::parse_iras_id);

    let iras_id = match parsed {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(
                url = %display_url(&headers, &uri),
                error = %e,
                "Invalid or missing 'irasId' parameter in request",
            );
            return Ok(respond(ValidationResponse::bad_request(now)));
        }
    };

    let envelope = match state.records.get_record_by_iras_id(iras_id).await? {
        Some(data) => ValidationResponse::success(data, now),
        None => ValidationResponse::not_found(iras_id, now),
    };

    Ok(respond(envelope))
}

fn respond(envelope: ValidationResponse) -> (StatusCode, Json<ValidationResponse>) {
    (envelope.status_code(), Json(envelope))
}

/// Request URL for logging: the URI as received, prefixed with the `Host`
/// header when the URI itself is origin-form.
fn display_url(headers: &HeaderMap, uri: &Uri) -> String {
    if uri.authority().is_some() {
        return uri.to_string();
    }

    match headers.get(HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("{host}{uri}"),
        None => uri.to_string(),
    }
}
