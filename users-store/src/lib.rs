//! Persistence layer for the users service.
//!
//! Defines the [`UserStore`] capability set the HTTP handlers depend on,
//! together with a PostgreSQL backend for production and an in-memory
//! backend for tests and database-less runs.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod error;
pub mod memory;
pub mod postgres;

pub use backend::UserStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
