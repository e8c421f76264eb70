use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::ProjectRecordLookup;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health probe.
    pub pool: iras_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Project record lookup used by the validation endpoint.
    pub records: Arc<dyn ProjectRecordLookup>,
}
