//! Runtime configuration read from the environment.

use crate::error::GatewayError;

/// Socket address bound when `USERS_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Pool size used when `USERS_DB_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Settings for a single server process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,

    /// PostgreSQL connection URL. `None` selects the in-memory store.
    pub database_url: Option<String>,

    /// Upper bound on pooled database connections.
    pub max_connections: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl GatewayConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if `USERS_DB_MAX_CONNECTIONS` is not
    /// a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("USERS_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        config.database_url = get("DATABASE_URL");
        if let Some(raw) = get("USERS_DB_MAX_CONNECTIONS") {
            config.max_connections = parse_max_connections(&raw)?;
        }

        Ok(config)
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, GatewayError> {
    let invalid = |reason: String| GatewayError::Config {
        key: "USERS_DB_MAX_CONNECTIONS",
        reason,
    };
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(invalid("must be at least 1".to_owned())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(format!("'{raw}' is not a positive integer: {e}"))),
    }
}
