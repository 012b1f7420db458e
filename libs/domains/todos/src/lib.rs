//! Todos Domain
//!
//! CRUD over persisted todo items with keyset pagination.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP decoding, validation, status mapping
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Service   │  ← Existence checks, pagination rules
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← One atomic statement per call (trait + SQLite)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{SqliteTodoRepository, TodoService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = sea_orm::Database::connect("sqlite://.sqlite3/todo.db?mode=rwc").await?;
//! let service = TodoService::new(SqliteTodoRepository::new(db));
//! let todo = service.create_todo("buy milk".into(), String::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

pub use error::{TodoError, TodoResult};
pub use handlers::TodoApiDoc;
pub use models::{
    CreateTodo, DEFAULT_PAGE_SIZE, DeleteTodos, MAX_PAGE_SIZE, ReadTodos, Todo, TodoResponse, TodosResponse,
    UpdateTodo,
};
pub use repository::TodoRepository;
pub use service::TodoService;
pub use sqlite::SqliteTodoRepository;
