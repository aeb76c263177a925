/// Errors produced by the `users-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A user id could not be parsed as a signed 32-bit integer.
    #[error("invalid user id '{value}': {reason}")]
    InvalidUserId { value: String, reason: String },
}
