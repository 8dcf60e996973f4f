//! Shared helpers for the HTTP tests.

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

/// Create an in-memory database with the schema applied.
pub async fn test_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

/// Create a test app with an in-memory database
pub async fn test_app() -> Router {
    routes::create_router(AppState::new(test_db().await))
}

/// Create a test app and keep a handle on its state for row counts.
pub async fn test_app_with_state() -> (Router, AppState<SqliteDatabase>) {
    let state = AppState::new(test_db().await);
    (routes::create_router(state.clone()), state)
}

/// Create a test app whose pool is already closed, so every store call fails.
pub async fn closed_app() -> Router {
    let state = AppState::new(test_db().await);
    state.db().pool().close().await;
    routes::create_router(state)
}

/// Count rows with a scalar query.
pub async fn count(state: &AppState<SqliteDatabase>, sql: &str) -> i64 {
    sqlx::query_scalar(sql)
        .fetch_one(state.db().pool())
        .await
        .expect("Count query should succeed")
}

/// Send a GET request through the router.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Helper to parse JSON response body
pub async fn json_body(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// POST a user and return its id.
pub async fn create_user(app: &Router, name: &str) -> String {
    let response = post_json(app, "/users", serde_json::json!({ "name": name })).await;
    json_body(response).await["id"].as_str().unwrap().to_string()
}

/// POST a board administered by `admin_id` and return its id.
pub async fn create_board(app: &Router, name: &str, admin_id: &str) -> String {
    let response = post_json(
        app,
        "/boards",
        serde_json::json!({ "name": name, "adminUserId": admin_id }),
    )
    .await;
    json_body(response).await["id"].as_str().unwrap().to_string()
}

/// POST a list on `board_id` and return its id.
pub async fn create_list(app: &Router, name: &str, board_id: &str) -> String {
    let response = post_json(
        app,
        "/lists",
        serde_json::json!({ "name": name, "boardId": board_id }),
    )
    .await;
    json_body(response).await["id"].as_str().unwrap().to_string()
}

/// POST a card owned by `user_id` and return its id.
pub async fn create_card(app: &Router, title: &str, list_id: &str, user_id: &str) -> String {
    let response = post_json(
        app,
        "/cards",
        serde_json::json!({ "title": title, "listId": list_id, "userId": user_id }),
    )
    .await;
    json_body(response).await["id"].as_str().unwrap().to_string()
}
