use axum::Router;
use axum::routing::get;
use domain_todos::{SqliteTodoRepository, TodoService, handlers};

use crate::state::AppState;

pub mod health;

/// Application routes with state already applied.
pub fn routes(state: &AppState) -> Router {
    let service = TodoService::new(SqliteTodoRepository::new(state.db.clone()));

    Router::new().nest("/todos", handlers::router(service))
}

/// `GET /ready`, which pings the database.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
