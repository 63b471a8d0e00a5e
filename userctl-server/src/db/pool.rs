//! Database connection pool management
//!
//! Uses sqlx PgPool. The pool is opened once at startup and validated with
//! a liveness probe before the server binds.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a connection (sqlx's own default).
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a PostgreSQL connection pool and ping it.
///
/// # Errors
///
/// Returns an error if the connection fails or the liveness probe fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/users").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(
        database_url,
        DEFAULT_MAX_CONNECTIONS,
        DEFAULT_ACQUIRE_TIMEOUT,
    )
    .await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long to wait for a connection before failing
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;

    ping(&pool).await?;
    tracing::debug!(max_connections, "database pool ready");

    Ok(pool)
}

/// Liveness probe: acquire a connection and ping the server.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
