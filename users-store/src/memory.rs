//! In-memory user store.
//!
//! Keeps records in a `BTreeMap` keyed by id, so listing is naturally in
//! ascending id order. Ids start at 1 and are never reused, even after a
//! delete. Used by tests and when the server runs without a database.

use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use tracing::debug;
use users_core::{User, UserId, UserInput};

use crate::{StoreError, UserStore};

#[derive(Debug)]
struct Records {
    users: BTreeMap<UserId, User>,
    next_id: i32,
}

impl Default for Records {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Thread-safe in-memory implementation of [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] if a writer panicked mid-update.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.users.len())
    }

    /// Returns `true` if no users are stored.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] if a writer panicked mid-update.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.users.is_empty())
    }

    /// Returns `true` if a user with this id is stored.
    ///
    /// # Errors
    /// Returns [`StoreError::Poisoned`] if a writer panicked mid-update.
    pub fn contains(&self, id: UserId) -> Result<bool, StoreError> {
        Ok(self.read()?.users.contains_key(&id))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, input: &UserInput) -> Result<User, StoreError> {
        let mut records = self.write()?;
        let id = UserId(records.next_id);
        records.next_id = records.next_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let user = input.clone().into_user(id);
        records.users.insert(id, user.clone());
        debug!(user_id = %id, "user created");
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn get_user(&self, id: UserId) -> Result<User, StoreError> {
        self.read()?
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_user(&self, id: UserId, input: &UserInput) -> Result<User, StoreError> {
        let mut records = self.write()?;
        let slot = records.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = input.clone().into_user(id);
        debug!(user_id = %id, "user updated");
        Ok(slot.clone())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), StoreError> {
        let removed = self.write()?.users.remove(&id).is_some();
        debug!(user_id = %id, removed, "user delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserInput {
        UserInput::new("Alice", "alice@example.com", 22)
    }

    fn bob() -> UserInput {
        UserInput::new("Bob", "bob@example.com", 30)
    }

    #[tokio::test]
    async fn memory_store_create_get_delete_lifecycle() {
        let store = MemoryStore::new();
        let created = match store.create_user(&alice()).await {
            Ok(u) => u,
            Err(e) => panic!("create failed: {e}"),
        };
        assert_eq!(created.id, UserId(1), "first id must be 1");
        assert!(matches!(store.contains(created.id), Ok(true)));

        let fetched = match store.get_user(created.id).await {
            Ok(u) => u,
            Err(e) => panic!("get failed: {e}"),
        };
        assert_eq!(fetched, created);

        assert!(store.delete_user(created.id).await.is_ok());
        assert!(matches!(store.contains(created.id), Ok(false)));
        assert!(matches!(store.is_empty(), Ok(true)));
    }

    #[tokio::test]
    async fn memory_store_lists_in_ascending_id_order() {
        let store = MemoryStore::new();
        for input in [alice(), bob()] {
            if let Err(e) = store.create_user(&input).await {
                panic!("create failed: {e}");
            }
        }
        let names: Vec<String> = match store.list_users().await {
            Ok(users) => users.into_iter().map(|u| u.name).collect(),
            Err(e) => panic!("list failed: {e}"),
        };
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn memory_store_missing_id_is_not_found() {
        let store = MemoryStore::new();
        let get = store.get_user(UserId(123)).await;
        assert!(matches!(get, Err(StoreError::NotFound(UserId(123)))));

        let update = store.update_user(UserId(999), &bob()).await;
        assert!(matches!(update, Err(ref e) if e.is_not_found()));
        assert!(matches!(store.is_empty(), Ok(true)), "update must not insert");
    }

    #[tokio::test]
    async fn memory_store_update_replaces_fields_and_keeps_id() {
        let store = MemoryStore::new();
        let created = match store.create_user(&alice()).await {
            Ok(u) => u,
            Err(e) => panic!("create failed: {e}"),
        };
        let changed = UserInput::new("Alice Updated", "alice2@example.com", 25);
        let updated = match store.update_user(created.id, &changed).await {
            Ok(u) => u,
            Err(e) => panic!("update failed: {e}"),
        };
        assert_eq!(updated, changed.into_user(created.id));
        assert!(matches!(store.get_user(created.id).await, Ok(ref u) if *u == updated));
    }

    #[tokio::test]
    async fn memory_store_delete_is_idempotent_and_ids_are_not_reused() {
        let store = MemoryStore::new();
        assert!(store.delete_user(UserId(5)).await.is_ok(), "deleting absent id succeeds");

        let first = match store.create_user(&alice()).await {
            Ok(u) => u,
            Err(e) => panic!("create failed: {e}"),
        };
        assert!(store.delete_user(first.id).await.is_ok());
        let second = match store.create_user(&bob()).await {
            Ok(u) => u,
            Err(e) => panic!("create failed: {e}"),
        };
        assert!(second.id > first.id, "ids must not be reused after delete");
        assert!(matches!(store.len(), Ok(1)));
    }

    #[tokio::test]
    async fn memory_store_reports_exhausted_id_space() {
        let store = MemoryStore::new();
        match store.records.write() {
            Ok(mut records) => records.next_id = i32::MAX,
            Err(e) => panic!("lock poisoned: {e}"),
        }
        let result = store.create_user(&alice()).await;
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert!(matches!(store.is_empty(), Ok(true)));
    }
}
