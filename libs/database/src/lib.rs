//! Database library providing the SQLite connector and shared utilities
//!
//! # Features
//!
//! - `config` - Load [`sqlite::SqliteConfig`] from the environment via `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect(".sqlite3/todo.db").await?;
//! sqlite::run_migrations::<Migrator>(&db, "todos_api").await?;
//! ```

pub mod common;
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
