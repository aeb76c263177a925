//! PostgreSQL-backed user store.
//!
//! Expects an existing table:
//!
//! ```sql
//! CREATE TABLE users (
//!     id    SERIAL PRIMARY KEY,
//!     name  TEXT    NOT NULL,
//!     email TEXT    NOT NULL,
//!     age   INTEGER NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use tracing::debug;
use users_core::{User, UserId, UserInput};

use crate::{StoreError, UserStore};

/// Row shape shared by every query that returns a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    age: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

/// [`UserStore`] over a PostgreSQL connection pool.
///
/// Concurrency safety comes from the pool and the database's own isolation;
/// every method issues exactly one statement.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url` with at most `max_connections`.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the initial connection fails.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, input: &UserInput) -> Result<User, StoreError> {
        let row: UserRow = sqlx::query_as(
            "INSERT INTO users (name, email, age) VALUES ($1, $2, $3) \
             RETURNING id, name, email, age",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.age)
        .fetch_one(&self.pool)
        .await?;
        debug!(user_id = row.id, "user created");
        Ok(row.into())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT id, name, email, age FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, id: UserId) -> Result<User, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, name, email, age FROM users WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;
        row.map(User::from).ok_or(StoreError::NotFound(id))
    }

    async fn update_user(&self, id: UserId, input: &UserInput) -> Result<User, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            "UPDATE users SET name = $2, email = $3, age = $4 WHERE id = $1 \
             RETURNING id, name, email, age",
        )
        .bind(id.get())
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.age)
        .fetch_optional(&self.pool)
        .await?;
        debug!(user_id = %id, found = row.is_some(), "user update");
        row.map(User::from).ok_or(StoreError::NotFound(id))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        debug!(user_id = %id, rows = result.rows_affected(), "user delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_row_converts_to_domain_user() {
        let row = UserRow {
            id: 3,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            age: 22,
        };
        let user = User::from(row);
        assert_eq!(user, UserInput::new("Alice", "alice@example.com", 22).into_user(UserId(3)));
    }

    #[tokio::test]
    async fn connect_with_malformed_url_is_a_database_error() {
        let result = PgStore::connect("not a url", 1).await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }
}
