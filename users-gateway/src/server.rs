//! The HTTP server object: route table plus store handle, built once at
//! process start.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};
use users_store::{MemoryStore, PgStore};

use crate::{
    config::GatewayConfig,
    error::GatewayError,
    routes::{create_router, SharedStore},
};

/// A configured users API server.
pub struct Server {
    router: Router,
    store: SharedStore,
}

impl Server {
    /// Build the route table over `store`.
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        let router = create_router(Arc::clone(&store));
        Self { router, store }
    }

    /// Select and initialise the store described by `config`.
    ///
    /// Connects to PostgreSQL when a database URL is configured and falls back
    /// to an empty in-memory store otherwise.
    ///
    /// # Errors
    /// Returns [`GatewayError::Store`] if the database cannot be reached.
    pub async fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let store: SharedStore = match &config.database_url {
            Some(url) => {
                let store = PgStore::connect(url, config.max_connections).await?;
                info!(max_connections = config.max_connections, "connected to PostgreSQL");
                Arc::new(store)
            }
            None => {
                warn!("DATABASE_URL not set; users are kept in memory only");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::new(store))
    }

    /// The store every handler delegates to.
    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// A clone of the route table, e.g. for driving it in-process.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve requests on `listener` until Ctrl-C is received.
    ///
    /// In-flight requests are allowed to finish before this returns.
    ///
    /// # Errors
    /// Returns [`GatewayError::Io`] if the listener fails.
    pub async fn run(self, listener: TcpListener) -> Result<(), GatewayError> {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
