/// Domain-level errors shared by every crate in the workspace.
///
/// These describe caller faults. Store failures are not represented here;
/// they travel as `sqlx::Error` so they can never be confused with a
/// negative lookup result.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
