//! HTTP tests for the `/todos` router, backed by SQLite.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use domain_todos::{SqliteTodoRepository, TodoService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDatabase;
use tower::ServiceExt;

fn app(db: &TestDatabase) -> Router {
    let service = TodoService::new(SqliteTodoRepository::new(db.connection()));
    Router::new().nest("/todos", handlers::router(service))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create(app: &Router, subject: &str) -> Value {
    let (status, body) = send(
        app,
        json_request(Method::POST, "/todos", json!({ "subject": subject })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["todo"].clone()
}

#[tokio::test]
async fn test_post_creates_todo() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let todo = create(&app, "buy milk").await;

    assert_eq!(todo["id"], 1);
    assert_eq!(todo["subject"], "buy milk");
    assert_eq!(todo["description"], "");
    assert_eq!(todo["created_at"], todo["updated_at"]);
}

#[tokio::test]
async fn test_post_empty_subject_is_bad_request() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/todos", json!({ "subject": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["subject"].is_array());
}

#[tokio::test]
async fn test_get_defaults_to_five_in_ascending_order() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    for i in 0..7 {
        create(&app, &format!("todo {i}")).await;
    }

    let (status, body) = send(
        &app,
        Request::get("/todos").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_get_with_cursor_and_size() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    for i in 0..3 {
        create(&app, &format!("todo {i}")).await;
    }

    let (status, body) = send(
        &app,
        Request::get("/todos?prev_id=2&size=2")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], 3);
}

#[tokio::test]
async fn test_get_largest_size_returns_everything() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    for i in 0..3 {
        create(&app, &format!("todo {i}")).await;
    }

    let uri = format!("/todos?size={}", u64::MAX);
    let (status, body) = send(&app, Request::get(uri).body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todos"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_malformed_query_is_bad_request() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = send(
        &app,
        Request::get("/todos?size=lots").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_put_updates_todo() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(&app, "old").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            "/todos",
            json!({ "id": created["id"], "subject": "new subject", "description": "new desc" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todo"]["subject"], "new subject");
    assert_eq!(body["todo"]["description"], "new desc");
}

#[tokio::test]
async fn test_put_missing_todo_is_not_found() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            "/todos",
            json!({ "id": 42, "subject": "ghost", "description": "" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_partial_match_is_ok() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    create(&app, "only").await;

    let (status, body) = send(
        &app,
        json_request(Method::DELETE, "/todos", json!({ "ids": [1, 2, 3] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_delete_no_match_is_not_found() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, _) = send(
        &app,
        json_request(Method::DELETE, "/todos", json!({ "ids": [5] })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_empty_ids_is_bad_request() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    create(&app, "untouched").await;

    let (status, body) = send(
        &app,
        json_request(Method::DELETE, "/todos", json!({ "ids": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["ids"].is_array());

    let (_, body) = send(&app, Request::get("/todos").body(Body::empty()).unwrap()).await;
    assert_eq!(body["todos"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_request() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let cases = [
        (Method::POST, json!({ "description": "no subject" })),
        (Method::PUT, json!({ "id": "abc", "subject": "s" })),
        (Method::DELETE, json!({})),
    ];

    for (method, body) in cases {
        let (status, response) = send(&app, json_request(method.clone(), "/todos", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(response["error"], "JSON_EXTRACTION", "{method}");
    }
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/todos")
        .body(Body::from(json!({ "subject": "s" }).to_string()))
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri("/todos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
