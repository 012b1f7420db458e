use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect to the SQLite database file at `path` with default pool settings
///
/// # Example
/// ```ignore
/// use database::sqlite::connect;
///
/// let db = connect(".sqlite3/todo.db").await?;
/// ```
pub async fn connect(path: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqliteConfig::new(path)).await
}

/// Connect using a SqliteConfig
///
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let db = connect_from_config(SqliteConfig::from_env()?).await?;
/// ```
pub async fn connect_from_config(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    let path = config.path.display().to_string();
    let db = connect_with_options(config.into_connect_options()).await?;
    info!(db_path = %path, "Successfully connected to SQLite database");
    Ok(db)
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    Database::connect(options).await
}

/// Connect from config with automatic retry on failure
///
/// Uses exponential backoff; `None` falls back to the default [`RetryConfig`].
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let operation = || connect_from_config(config.clone());

    match retry_config {
        Some(retry_config) => retry_with_backoff(operation, retry_config).await,
        None => retry(operation).await,
    }
}

/// Run database migrations using the provided Migrator
///
/// # Arguments
/// * `db` - Database connection
/// * `app_name` - Name of the app for logging (e.g., "todos_api")
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect.db");

        let db = connect(path.to_str().unwrap()).await.unwrap();

        assert!(path.exists());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_fails_when_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing").join("connect.db");

        let config = SqliteConfig {
            connect_timeout_secs: 1,
            acquire_timeout_secs: 1,
            ..SqliteConfig::new(&path)
        };

        assert!(connect_from_config(config).await.is_err());
    }
}
