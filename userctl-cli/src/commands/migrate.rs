//! Schema command: create the users table and exit

use anyhow::{Context, Result};
use clap::Parser;

use userctl_server::config::require_database_url;
use userctl_server::db::ensure_schema;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

/// Ensure the schema exists. Unlike `serve`, a failure here is an error.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)
        .context("Set DATABASE_URL via --database-url, the environment, or ./.env")?;

    let pool = super::connect(&database_url).await?;
    ensure_schema(&pool)
        .await
        .context("Failed to create users table")?;
    pool.close().await;

    tracing::info!("users table is ready");
    Ok(())
}
