//! Idempotent schema creation, run once at startup

use sqlx::PgPool;

use super::repos::DbError;

/// Create the `users` table if it does not already exist.
///
/// Safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring users table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT,
            email TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
