//! userctl-server: HTTP CRUD backend over a single `users` table
//!
//! Loads its database URL from the environment, opens a PostgreSQL pool,
//! ensures the schema exists, and serves the `/api/go/users` routes.

pub mod config;
pub mod db;
pub mod http;

pub use config::{ConfigError, ServerConfig};
pub use http::{build_router, run_server, AppState};
