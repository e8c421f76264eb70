/// IRAS study identifiers are 32-bit signed integers in the upstream system.
pub type IrasId = i32;

/// Research Ethics Committee reference code.
pub type RecId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
