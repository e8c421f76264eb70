pub mod health;
pub mod project_record;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projectrecord/validate                          IRAS ID validation (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projectrecord", project_record::router())
}
