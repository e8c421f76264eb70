//! Parsing and validation of the inbound `irasId` parameter.

use crate::error::CoreError;
use crate::types::IrasId;

/// Query-string key carrying the study identifier.
pub const IRAS_ID_PARAM: &str = "irasId";

/// Error text returned to callers for a missing or unparsable identifier.
pub const INVALID_IRAS_ID_MESSAGE: &str = "Missing or invalid 'irasId' parameter.";

/// Error text returned to callers when no record matches `iras_id`.
pub fn not_found_message(iras_id: IrasId) -> String {
    format!("No record found for IRAS ID: {iras_id}")
}

/// Look up the raw `irasId` value in decoded query pairs.
///
/// Matching is exact by default; with `case_insensitive` set, keys equal to
/// `irasId` ignoring ASCII case also match. `Ok(None)` when no key matches.
/// More than one matching pair is rejected, whatever the values, so the
/// outcome never depends on parameter order.
pub fn find_param(
    params: &[(String, String)],
    case_insensitive: bool,
) -> Result<Option<&str>, CoreError> {
    let mut matches = params.iter().filter(|(key, _)| {
        key == IRAS_ID_PARAM || (case_insensitive && key.eq_ignore_ascii_case(IRAS_ID_PARAM))
    });

    let first = matches.next().map(|(_, value)| value.as_str());
    if matches.next().is_some() {
        return Err(CoreError::Validation(format!(
            "'{IRAS_ID_PARAM}' parameter supplied more than once"
        )));
    }

    Ok(first)
}

/// Parse a raw parameter value into an [`IrasId`].
///
/// Missing, empty and whitespace-only values are rejected. Surrounding
/// whitespace is ignored and a single leading sign is accepted; anything
/// else must be a base-10 integer that fits in 32 bits.
pub fn parse_iras_id(raw: Option<&str>) -> Result<IrasId, CoreError> {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw.is_empty() {
        return Err(CoreError::Validation(format!(
            "'{IRAS_ID_PARAM}' parameter is missing"
        )));
    }

    raw.parse::<IrasId>().map_err(|e| {
        CoreError::Validation(format!(
            "'{IRAS_ID_PARAM}' value '{raw}' is not a valid integer: {e}"
        ))
    })
}
