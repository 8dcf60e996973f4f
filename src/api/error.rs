//! Handler errors and their JSON responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use utoipa::ToSchema;

use crate::db::DbError;
use crate::validation::Violation;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Validation failed")]
    pub error: String,
    /// Field-level failures, present only for validation errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            violations: Vec::new(),
        }
    }
}

/// Everything a handler can fail with.
///
/// Store failures carry whether they happened on a read or a write path,
/// since the two map to different status codes.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Validation failed")]
    Validation(Vec<Violation>),

    #[error("{0}")]
    Read(DbError),

    #[error("{0}")]
    Write(DbError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl HandlerError {
    /// Wrap a store failure on a read path. Missing rows become 404.
    pub fn read(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound(e.to_string()),
            e => Self::Read(e),
        }
    }

    /// Wrap a store failure on a write path.
    pub fn write(e: DbError) -> Self {
        Self::Write(e)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Write(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Read(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for HandlerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for HandlerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Self::Read(e) | Self::Write(e) = &self {
            warn!(error = %e, "store operation failed");
        }

        let body = match self {
            Self::Validation(violations) => ErrorResponse {
                error: "Validation failed".to_string(),
                violations,
            },
            other => ErrorResponse::new(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
