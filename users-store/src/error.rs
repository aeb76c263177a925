//! Error types for the store crate.

use users_core::UserId;

/// Errors returned by [`UserStore`](crate::UserStore) implementations.
///
/// Callers distinguish a missing record by matching [`StoreError::NotFound`];
/// every other variant is an internal failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No record exists for the requested id.
    #[error("user {0} not found")]
    NotFound(UserId),

    /// The database driver reported a failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The in-memory id counter cannot advance any further.
    #[error("user id space exhausted")]
    IdsExhausted,

    /// A previous writer panicked while holding the in-memory lock.
    #[error("user store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Returns `true` if this is the distinguished not-found signal.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
