//! User handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::{AppState, ErrorResponse, HandlerError, ValidatedJson};
use crate::db::{Database, NewUser, User, UserRepository};

/// User response DTO
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "936da01f-9abd-4d9d-80c7-02af85c822a8")]
    pub id: Uuid,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Stored as given; not format-checked
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// Create user request body
///
/// Schema only; bodies are checked by the `Validate` rules before a
/// handler runs.
#[derive(ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 400, description = "Store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_users<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<UserResponse>>, HandlerError> {
    let users = state
        .db()
        .users()
        .list()
        .await
        .map_err(HandlerError::read)?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 422, description = "Validation or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_user<D: Database>(
    State(state): State<AppState<D>>,
    ValidatedJson(input): ValidatedJson<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), HandlerError> {
    let user = state
        .db()
        .users()
        .create(&input)
        .await
        .map_err(HandlerError::write)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
