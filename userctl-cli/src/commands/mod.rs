//! Subcommand implementations

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use userctl_server::db::{create_pool, PgPool};

/// Open a pool and run the liveness probe. Failure is fatal for every
/// subcommand: there is nothing to do without a database.
async fn connect(database_url: &str) -> Result<PgPool> {
    create_pool(database_url)
        .await
        .context("Could not establish a connection with the database")
}
