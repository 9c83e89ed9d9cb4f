use notemaker_core::error::CoreError;

/// Error type for repository calls.
///
/// Wraps [`CoreError`] for domain failures (mainly `NotFound`) and
/// [`sqlx::Error`] for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// `true` when the lookup simply found no row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::Core(CoreError::NotFound { .. }))
    }
}
