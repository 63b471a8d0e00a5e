//! userctl - users CRUD backend
//!
//! Entry point for the `userctl` binary:
//! - `serve` (default): open the database, ensure the schema, serve HTTP
//! - `migrate`: ensure the schema and exit

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::migrate::MigrateArgs;
use commands::serve::ServeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "userctl",
    author,
    version,
    about = "HTTP backend exposing CRUD operations over a PostgreSQL users table"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Create the users table if it does not exist, then exit
    Migrate(MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::run_serve(args).await,
        Some(Commands::Migrate(args)) => commands::migrate::run_migrate(args).await,
        None => commands::serve::run_serve(ServeArgs::from_env()).await,
    }
}
