//! HTTP handlers for the `/todos` collection.
//!
//! One path, dispatched on method. Request bodies are validated here; the
//! service trusts what it receives.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_helpers::{AppError, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    CreateTodo, DeleteTodos, DeleteTodosResponse, ReadTodos, Todo, TodoResponse, TodosResponse,
    UpdateTodo,
};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(read_todos, create_todo, update_todo, delete_todos),
    components(schemas(
        Todo,
        CreateTodo,
        UpdateTodo,
        DeleteTodos,
        TodoResponse,
        TodosResponse,
        DeleteTodosResponse
    )),
    tags((name = "todos", description = "Todo CRUD with keyset pagination"))
)]
pub struct TodoApiDoc;

/// Router for the todo collection, with the service applied as state
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    Router::new()
        .route(
            "/",
            get(read_todos::<R>)
                .post(create_todo::<R>)
                .put(update_todo::<R>)
                .delete(delete_todos::<R>),
        )
        .with_state(Arc::new(service))
}

/// List todos after an optional cursor
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    params(ReadTodos),
    responses(
        (status = 200, description = "One page of todos in ascending id order", body = TodosResponse),
        (status = 400, description = "Malformed prev_id or size"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn read_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    query: Result<Query<ReadTodos>, QueryRejection>,
) -> Result<Json<TodosResponse>, AppError> {
    let Query(query) = query?;

    let todos = service
        .read_todos(query.prev_id, query.size.unwrap_or_default())
        .await?;

    Ok(Json(TodosResponse { todos }))
}

/// Create a todo
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = service.create_todo(input.subject, input.description).await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// Update a todo's subject and description
#[utoipa::path(
    put,
    path = "/todos",
    tag = "todos",
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = service
        .update_todo(input.id, input.subject, input.description)
        .await?;
    Ok(Json(todo.into()))
}

/// Delete todos by id
#[utoipa::path(
    delete,
    path = "/todos",
    tag = "todos",
    request_body = DeleteTodos,
    responses(
        (status = 200, description = "At least one todo deleted", body = DeleteTodosResponse),
        (status = 400, description = "Empty or malformed ids"),
        (status = 404, description = "None of the todos exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<DeleteTodos>,
) -> Result<Json<DeleteTodosResponse>, AppError> {
    service.delete_todos(input.ids).await?;
    Ok(Json(DeleteTodosResponse::default()))
}
