use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use serde_json::Value;

use super::HandlerError;
use crate::db::DbError;
use crate::validation::Violation;

async fn body_of(err: HandlerError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn validation_is_422_with_violations() {
    let err = HandlerError::Validation(vec![Violation::new(
        "name",
        "isNotEmpty",
        "name should not be empty",
    )]);

    let (status, body) = body_of(err).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["violations"][0]["field"], "name");
    assert_eq!(body["violations"][0]["constraint"], "isNotEmpty");
}

#[tokio::test]
async fn store_errors_depend_on_path() {
    let read = HandlerError::read(DbError::Database {
        message: "pool closed".to_string(),
    });
    let (status, body) = body_of(read).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Database error: pool closed");
    assert!(body.get("violations").is_none());

    let write = HandlerError::write(DbError::Constraint {
        message: "FOREIGN KEY constraint failed".to_string(),
    });
    let (status, body) = body_of(write).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "Constraint violation: FOREIGN KEY constraint failed"
    );
}

#[tokio::test]
async fn not_found_on_read_is_404() {
    let err = HandlerError::read(DbError::NotFound {
        entity_type: "Card".to_string(),
        id: "abc".to_string(),
    });
    assert!(matches!(err, HandlerError::NotFound(_)));

    let (status, body) = body_of(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Entity not found: Card with id 'abc'");
}

#[tokio::test]
async fn rejection_keeps_its_status() {
    let err = HandlerError::Rejected {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        message: "Failed to buffer the request body: length limit exceeded".to_string(),
    };
    let (status, body) = body_of(err).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        body["error"],
        "Failed to buffer the request body: length limit exceeded"
    );
}
