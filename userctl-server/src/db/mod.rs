//! Database layer - connection pool, schema, and repositories
//!
//! Every request reads or writes the store directly; nothing is cached
//! in-process between requests.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, NewUser, User, UserRepo};
pub use schema::ensure_schema;
pub use sqlx::PgPool;
