use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check SQLite database health
///
/// Executes `SELECT 1` through the pool; used by the `/ready` endpoint.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running SQLite health check");

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("SQLite health check failed: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::connect;

    #[tokio::test]
    async fn test_check_health_on_open_pool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("health.db");
        let db = connect(path.to_str().unwrap()).await.unwrap();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("closed.db");
        let db = connect(path.to_str().unwrap()).await.unwrap();
        let handle = db.clone();
        db.close().await.unwrap();

        let err = check_health(&handle).await.unwrap_err();
        assert!(err.to_string().contains("SQLite health check failed"));
    }
}
