//! SQLite test infrastructure
//!
//! Every [`TestDatabase`] owns a fresh database file inside its own temporary
//! directory, with all migrations applied. Pooled connections share that one
//! file, so concurrent tests stay isolated from each other.

use database::sqlite::{SqliteConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Migrated throwaway database, removed from disk on drop
pub struct TestDatabase {
    // Held for its Drop, which deletes the directory
    _dir: TempDir,
    path: PathBuf,
    connection: DatabaseConnection,
}

impl TestDatabase {
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir for test database");
        let path = dir.path().join("todo.db");

        let config = SqliteConfig {
            max_connections: 5,
            sqlx_logging: false,
            ..SqliteConfig::new(path.clone())
        };

        let connection = connect_from_config(config)
            .await
            .expect("Failed to connect to test database");

        run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to run migrations on test database");

        tracing::info!(path = %path.display(), "Test database ready (SQLite)");

        Self {
            _dir: dir,
            path,
            connection,
        }
    }

    /// A clone of the pooled connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
