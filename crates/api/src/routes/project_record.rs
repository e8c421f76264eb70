//! Route definitions for the `/projectrecord` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_record;
use crate::state::AppState;

/// Routes mounted at `/projectrecord`.
///
/// ```text
/// GET    /validate                          -> validate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", get(project_record::validate))
}
