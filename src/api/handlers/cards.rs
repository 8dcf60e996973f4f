//! Card handlers.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::{AppState, ErrorResponse, HandlerError, PathUuid, ValidatedJson};
use crate::db::{Card, CardMember, CardRepository, CardWithCreator, Database, NewCard};

/// Card response DTO
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    #[schema(example = "0b7e4d2c-8f1a-4e3b-a6c5-d9e8f7a6b5c4")]
    pub id: Uuid,
    #[schema(example = "Write release notes")]
    pub title: String,
    #[schema(example = "Cover the API changes")]
    pub description: Option<String>,
    #[serde(rename = "due_date")]
    #[schema(example = "2025-03-01T00:00:00Z")]
    pub due_date: Option<DateTime<Utc>>,
    #[schema(example = "5f0c7a3e-2b1d-4c6e-9f8a-7d6b5c4a3e2f")]
    pub list_id: Uuid,
}

impl From<Card> for CardResponse {
    fn from(c: Card) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            due_date: c.due_date,
            list_id: c.list_id,
        }
    }
}

/// Card joined to the user holding its owner link
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardCreatorResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "due_date")]
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: Uuid,
    pub creator_id: Uuid,
    #[schema(example = "Ada Lovelace")]
    pub creator_name: String,
    pub creator_email: Option<String>,
}

impl From<CardWithCreator> for CardCreatorResponse {
    fn from(c: CardWithCreator) -> Self {
        Self {
            id: c.card.id,
            title: c.card.title,
            description: c.card.description,
            due_date: c.card.due_date,
            list_id: c.card.list_id,
            creator_id: c.creator.id,
            creator_name: c.creator.name,
            creator_email: c.creator.email,
        }
    }
}

/// A user linked to a card
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardMemberResponse {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub is_owner: bool,
}

impl From<CardMember> for CardMemberResponse {
    fn from(m: CardMember) -> Self {
        Self {
            id: m.user.id,
            name: m.user.name,
            email: m.user.email,
            is_owner: m.is_owner,
        }
    }
}

/// Create card request body
///
/// Schema only; bodies are checked by the `Validate` rules before a
/// handler runs.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateCardRequest {
    #[schema(example = "Write release notes")]
    pub title: String,
    pub description: Option<String>,
    /// ISO 8601 date or date-time
    #[schema(rename = "due_date", example = "2025-03-01")]
    pub due_date: Option<String>,
    #[schema(example = "5f0c7a3e-2b1d-4c6e-9f8a-7d6b5c4a3e2f")]
    pub list_id: Uuid,
    /// User recorded as the card's owner
    #[schema(example = "936da01f-9abd-4d9d-80c7-02af85c822a8")]
    pub user_id: Uuid,
}

/// List all cards
#[utoipa::path(
    get,
    path = "/cards",
    tag = "cards",
    responses(
        (status = 200, description = "List of cards", body = Vec<CardResponse>),
        (status = 400, description = "Store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_cards<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<CardResponse>>, HandlerError> {
    let cards = state
        .db()
        .cards()
        .list()
        .await
        .map_err(HandlerError::read)?;

    Ok(Json(cards.into_iter().map(CardResponse::from).collect()))
}

/// Create a card
///
/// The card and the owner link for `userId` are written in one
/// transaction.
#[utoipa::path(
    post,
    path = "/cards",
    tag = "cards",
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card created", body = CardResponse),
        (status = 422, description = "Validation or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_card<D: Database>(
    State(state): State<AppState<D>>,
    ValidatedJson(input): ValidatedJson<NewCard>,
) -> Result<(StatusCode, Json<CardResponse>), HandlerError> {
    let card = state
        .db()
        .cards()
        .create(&input)
        .await
        .map_err(HandlerError::write)?;

    Ok((StatusCode::CREATED, Json(CardResponse::from(card))))
}

/// Get a card with its creator
#[utoipa::path(
    get,
    path = "/cards/{cardId}/creator",
    tag = "cards",
    params(
        ("cardId" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card with creator", body = CardCreatorResponse),
        (status = 400, description = "Invalid cardId or store error", body = ErrorResponse),
        (status = 404, description = "Card or owner link not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_card_creator<D: Database>(
    State(state): State<AppState<D>>,
    PathUuid(card_id): PathUuid,
) -> Result<Json<CardCreatorResponse>, HandlerError> {
    let card = state
        .db()
        .cards()
        .get_with_creator(card_id)
        .await
        .map_err(HandlerError::read)?;

    Ok(Json(CardCreatorResponse::from(card)))
}

/// List the users linked to a card
///
/// Owners come first. An unknown card yields an empty list.
#[utoipa::path(
    get,
    path = "/cards/{cardId}/users",
    tag = "cards",
    params(
        ("cardId" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Users linked to the card", body = Vec<CardMemberResponse>),
        (status = 400, description = "Invalid cardId or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_card_users<D: Database>(
    State(state): State<AppState<D>>,
    PathUuid(card_id): PathUuid,
) -> Result<Json<Vec<CardMemberResponse>>, HandlerError> {
    let members = state
        .db()
        .cards()
        .members(card_id)
        .await
        .map_err(HandlerError::read)?;

    Ok(Json(
        members.into_iter().map(CardMemberResponse::from).collect(),
    ))
}
