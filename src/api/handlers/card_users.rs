//! Card membership handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::{AppState, ErrorResponse, HandlerError, ValidatedJson};
use crate::db::{CardUser, CardUserRepository, Database};

/// Card-user link DTO, used for both request and response
///
/// As a request it is schema only; bodies are checked by the `Validate`
/// rules before a handler runs.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardUserLink {
    #[schema(example = "0b7e4d2c-8f1a-4e3b-a6c5-d9e8f7a6b5c4")]
    pub card_id: Uuid,
    #[schema(example = "936da01f-9abd-4d9d-80c7-02af85c822a8")]
    pub user_id: Uuid,
    #[schema(example = false)]
    pub is_owner: bool,
}

impl From<CardUser> for CardUserLink {
    fn from(l: CardUser) -> Self {
        Self {
            card_id: l.card_id,
            user_id: l.user_id,
            is_owner: l.is_owner,
        }
    }
}

/// Link a user to a card
#[utoipa::path(
    post,
    path = "/card-users",
    tag = "cards",
    request_body = CardUserLink,
    responses(
        (status = 201, description = "Link created", body = CardUserLink),
        (status = 422, description = "Validation or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_card_user<D: Database>(
    State(state): State<AppState<D>>,
    ValidatedJson(input): ValidatedJson<CardUser>,
) -> Result<(StatusCode, Json<CardUserLink>), HandlerError> {
    let link = state
        .db()
        .card_users()
        .create(&input)
        .await
        .map_err(HandlerError::write)?;

    Ok((StatusCode::CREATED, Json(CardUserLink::from(link))))
}
