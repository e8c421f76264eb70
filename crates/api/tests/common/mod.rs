#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use iras_api::config::{LogFormat, ServerConfig};
use iras_api::router::build_app_router;
use iras_api::services::{ProjectRecordLookup, ProjectRecordService};
use iras_api::state::AppState;
use iras_db::repositories::{ProjectRecordRepo, ProjectRecordStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "postgres://localhost/iras_test".to_string(),
        db_max_connections: 5,
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        run_migrations: false,
        iras_id_case_insensitive: false,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over a real database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let store = Arc::new(ProjectRecordRepo::new(pool.clone()));
    build_app(pool, Arc::new(ProjectRecordService::new(store)), test_config())
}

/// Build the full application router over an in-memory store double.
///
/// The pool is lazy and never connects, so only routes that avoid it
/// (everything except `/health`) may be exercised.
pub fn build_app_with_store(store: Arc<dyn ProjectRecordStore>, config: ServerConfig) -> Router {
    build_app(
        lazy_pool(),
        Arc::new(ProjectRecordService::new(store)),
        config,
    )
}

/// Build the full application router over an arbitrary lookup service.
pub fn build_app_with_lookup(records: Arc<dyn ProjectRecordLookup>) -> Router {
    build_app(lazy_pool(), records, test_config())
}

fn build_app(pool: PgPool, records: Arc<dyn ProjectRecordLookup>, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        records,
    };
    build_app_router(state, &config)
}

fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://unused@localhost:1/unused")
        .unwrap()
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Seed the two reference records used across API tests.
pub async fn seed_records(pool: &PgPool) {
    sqlx::query(
        "INSERT INTO harp_project_records
            (id, iras_id, rec_id, rec_name, short_study_title, study_decision,
             date_registered, full_research_title)
         VALUES
            ('abc123', 45655, 789, 'Dr. Test', 'Short Title', 'Approved',
             '2023-05-10T00:00:00Z', 'Full Title of the Research Study'),
            ('def456', 99955, NULL, NULL, NULL, NULL,
             '2022-01-01T00:00:00Z', NULL)",
    )
    .execute(pool)
    .await
    .unwrap();
}
