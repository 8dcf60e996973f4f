//! Custom Axum extractors

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde_json::Value;
use uuid::Uuid;

use super::error::HandlerError;
use crate::validation::{Validate, parse_uuid};

/// JSON body checked against the target type's validation rules.
///
/// Rejects with 422 and the list of violations before any handler code,
/// and so before any database access, runs. A missing JSON content type
/// fails validation as an absent body; malformed JSON keeps axum's status.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Validate,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // A body sent without a JSON content type is treated as absent
        let value = match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => value,
            Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
            Err(rejection) => return Err(rejection.into()),
        };

        T::validate(&value)
            .map(Self)
            .map_err(HandlerError::Validation)
    }
}

/// Extract and validate a UUID from a single path segment
#[derive(Debug)]
pub struct PathUuid(pub Uuid);

impl<S> FromRequestParts<S> for PathUuid
where
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| HandlerError::BadRequest(e.body_text()))?;

        parse_uuid(&raw)
            .map(Self)
            .ok_or_else(|| HandlerError::BadRequest(format!("'{}' is not a valid UUID", raw)))
    }
}
