//! User repository
//!
//! Direct SQL against the `users` table:
//! - create: INSERT ... RETURNING id
//! - update: UPDATE, then re-SELECT the row
//! - get/delete: single statement by primary key

use sqlx::{FromRow, PgPool};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Client-supplied fields for create and full-replace update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every user, ordered by id.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Insert a user and return it with its generated id.
    pub async fn create(&self, new: NewUser) -> Result<User, DbError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
                .bind(new.name.as_deref())
                .bind(new.email.as_deref())
                .fetch_one(self.pool)
                .await?;

        tracing::debug!(user_id = id, "user created");

        Ok(User {
            id,
            name: new.name,
            email: new.email,
        })
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replace `name` and `email` for a user, then read the row back.
    ///
    /// The two statements are not atomic: a delete landing in between
    /// surfaces as `NotFound`.
    pub async fn update(&self, id: i32, new: NewUser) -> Result<User, DbError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(new.name.as_deref())
            .bind(new.email.as_deref())
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        self.get(id).await
    }

    /// Delete a user by id. Deleting a missing id is not an error.
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: "user",
        id: id.to_string(),
    }
}
