use axum::http::StatusCode;

use crate::api::test_support::{get, json_body, test_app};

#[tokio::test(flavor = "multi_thread")]
async fn health_returns_ok() {
    let app = test_app().await;

    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn docs_are_served() {
    let app = test_app().await;

    let response = get(&app, "/docs").await;

    assert_eq!(response.status(), StatusCode::OK);
}
