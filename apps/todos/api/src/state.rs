use database::sqlite::DatabaseConnection;

/// State shared by the application-level routers
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// SQLite pool; the todo repository holds a clone of the same pool
    pub db: DatabaseConnection,
}
