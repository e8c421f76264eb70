//! Repository layer: typed queries over the record store.

pub mod project_record_repo;

pub use project_record_repo::{ProjectRecordRepo, ProjectRecordStore};
