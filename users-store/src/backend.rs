//! User persistence abstraction trait.
//!
//! Allows swapping between PostgreSQL, the in-memory store, or test doubles
//! without changing the request handlers.

use async_trait::async_trait;
use users_core::{User, UserId, UserInput};

use crate::StoreError;

/// CRUD capability set over user records.
///
/// Implementations must be `Send + Sync` to allow use across async tasks and
/// are responsible for their own concurrency safety.
///
/// # Cancel Safety
/// Every method performs a single read or a single write. Dropping the future
/// before completion leaves the store either unchanged or with the write
/// applied, never partially applied.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return it with its assigned id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] or [`StoreError::IdsExhausted`] if the
    /// record cannot be written.
    async fn create_user(&self, input: &UserInput) -> Result<User, StoreError>;

    /// Return every user, in ascending id order.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the records cannot be read.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch a single user.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no record has this id.
    async fn get_user(&self, id: UserId) -> Result<User, StoreError>;

    /// Overwrite name, email and age of an existing user.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no record has this id.
    async fn update_user(&self, id: UserId, input: &UserInput) -> Result<User, StoreError>;

    /// Remove a user. Deleting an absent id succeeds.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the delete cannot be executed.
    async fn delete_user(&self, id: UserId) -> Result<(), StoreError>;
}
