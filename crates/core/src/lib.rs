pub mod error;
pub mod iras_id;
pub mod project_record;
pub mod types;
