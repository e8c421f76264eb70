//! Application services sitting between handlers and repositories.

pub mod project_record;

pub use project_record::{ProjectRecordLookup, ProjectRecordService};
