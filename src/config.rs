//! Environment-driven server configuration.

use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// Listen address used when [`BIND_ADDR_VAR`] is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Errors raised while reading server configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The database connection string is not configured.
    #[error("environment variable {DATABASE_URL_VAR} must be set")]
    MissingDatabaseUrl,
}

/// Deployment configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address and port the HTTP listener binds to.
    pub bind_addr: String,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when [`DATABASE_URL_VAR`]
    /// is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let bind_addr =
            std::env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
