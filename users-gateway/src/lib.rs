//! HTTP API gateway for the users service.
//!
//! Exposes CRUD endpoints for the user resource over an injected
//! [`UserStore`](users_store::UserStore), plus a liveness probe.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::GatewayConfig;
pub use error::{ApiError, GatewayError};
pub use server::Server;
