use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// None of the targeted todos exist
    #[error("Todo not found: {ids:?}")]
    NotFound { ids: Vec<i64> },

    /// A todo that was just inserted could not be read back
    #[error("Todo {id} disappeared before its creation could be confirmed")]
    Consistency { id: i64 },

    #[error("Database error during {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DbErr,
    },
}

pub type TodoResult<T> = Result<T, TodoError>;

impl TodoError {
    pub fn not_found(id: i64) -> Self {
        TodoError::NotFound { ids: vec![id] }
    }

    /// Wrap a store failure with the name of the repository call that produced it.
    pub(crate) fn database(operation: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| TodoError::Database { operation, source }
    }
}

/// Convert TodoError to AppError for standardized error responses
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound { ids } => AppError::NotFound(format!("Todo not found: {:?}", ids)),
            err @ TodoError::Consistency { .. } => AppError::InternalServerError(err.to_string()),
            TodoError::Database { operation, source } => AppError::Database { operation, source },
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
