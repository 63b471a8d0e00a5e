//! Repository implementations for database access
//!
//! One parameterized statement per operation; no multi-statement
//! transactions.

pub mod users;

pub use users::{NewUser, User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
