//! Integration tests for Board API endpoints.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::api::test_support::{
    closed_app, count, create_user, get, json_body, post_json, test_app, test_app_with_state,
};

#[tokio::test(flavor = "multi_thread")]
async fn create_board_writes_board_and_admin_link() {
    let (app, state) = test_app_with_state().await;
    let admin = create_user(&app, "Ada").await;

    let response = post_json(
        &app,
        "/boards",
        json!({"name": "Roadmap", "adminUserId": admin}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["name"], "Roadmap");
    assert!(body["id"].is_string());

    assert_eq!(count(&state, "SELECT COUNT(*) FROM boards").await, 1);
    assert_eq!(
        count(&state, "SELECT COUNT(*) FROM board_users WHERE is_admin = 1").await,
        1
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn create_board_with_unknown_admin_stores_nothing() {
    let (app, state) = test_app_with_state().await;

    let response = post_json(
        &app,
        "/boards",
        json!({"name": "Orphan", "adminUserId": Uuid::new_v4()}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(count(&state, "SELECT COUNT(*) FROM boards").await, 0);
    assert_eq!(count(&state, "SELECT COUNT(*) FROM board_users").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_board_reports_all_invalid_fields() {
    let app = test_app().await;

    let response = post_json(&app, "/boards", json!({"adminUserId": "admin"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    let fields: Vec<_> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["name", "adminUserId"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_boards_includes_admin() {
    let app = test_app().await;
    let admin = create_user(&app, "Ada").await;
    post_json(
        &app,
        "/boards",
        json!({"name": "Roadmap", "adminUserId": admin}),
    )
    .await;

    let response = get(&app, "/boards").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Roadmap");
    assert_eq!(body[0]["adminUserId"], admin.as_str());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_boards_store_failure_is_400() {
    let app = closed_app().await;

    let response = get(&app, "/boards").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
