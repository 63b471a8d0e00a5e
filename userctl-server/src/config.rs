//! Server configuration
//!
//! Values arrive already resolved (CLI flags with environment fallbacks):
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `PORT`: listen port (default: 8080)

use std::net::{IpAddr, SocketAddr};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors. All of these are fatal at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set in the environment variables")]
    MissingDatabaseUrl,
}

/// Check that a database URL was supplied. An empty or blank value counts
/// as missing.
pub fn require_database_url(database_url: Option<String>) -> Result<String, ConfigError> {
    database_url
        .filter(|url| !url.trim().is_empty())
        .ok_or(ConfigError::MissingDatabaseUrl)
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,
}

impl ServerConfig {
    /// Build a config from already-resolved values.
    pub fn new(
        database_url: Option<String>,
        host: IpAddr,
        port: u16,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            database_url: require_database_url(database_url)?,
        })
    }
}
