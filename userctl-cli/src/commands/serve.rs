//! HTTP server command
//!
//! Resolves configuration, opens the database, ensures the schema and
//! serves until Ctrl+C or SIGTERM.

use std::net::{IpAddr, Ipv4Addr};

use anyhow::{Context, Result};
use clap::Parser;

use userctl_server::config::DEFAULT_PORT;
use userctl_server::db::ensure_schema;
use userctl_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

impl ServeArgs {
    /// Arguments taken purely from the environment, used when no
    /// subcommand is given.
    pub fn from_env() -> Self {
        Self::parse_from(["serve"])
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Configuration errors must surface before anything connects or binds.
    let config = ServerConfig::new(args.database_url, args.host, args.port)
        .context("Set DATABASE_URL via --database-url, the environment, or ./.env")?;

    tracing::info!("Backend Service in Rust");

    let pool = super::connect(&config.database_url).await?;

    // Schema failures are logged, not fatal.
    if let Err(e) = ensure_schema(&pool).await {
        tracing::error!("Error creating table: {}", e);
    }

    // Run server (blocks until shutdown)
    run_server(pool, config.bind_addr)
        .await
        .context("Server failed to start")?;

    Ok(())
}
