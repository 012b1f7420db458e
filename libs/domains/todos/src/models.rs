use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page size used when a read asks for zero records
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// Largest limit SQLite accepts; bigger page sizes are clamped to it
pub const MAX_PAGE_SIZE: u64 = i64::MAX as u64;

/// Todo entity - a persisted todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Store-assigned identifier, never reused
    pub id: i64,
    pub subject: String,
    pub description: String,
    /// Set by the store when the row is inserted
    pub created_at: DateTime<Utc>,
    /// Set by the store on insert and on every update
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /todos`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTodo {
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /todos`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTodo {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i64,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Query string of `GET /todos`
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReadTodos {
    /// Id of the last todo of the previous page
    pub prev_id: Option<i64>,
    /// Maximum number of todos to return; 0 or absent means 5
    pub size: Option<u64>,
}

/// Body of `DELETE /todos`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeleteTodos {
    #[validate(length(min = 1, message = "ids must not be empty"))]
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodosResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteTodosResponse {}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self { todo }
    }
}
