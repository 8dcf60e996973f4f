//! List handlers.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::{AppState, ErrorResponse, HandlerError, PathUuid, ValidatedJson};
use crate::db::{Database, Id, List, ListRepository, NewList};
use crate::validation::parse_uuid;

/// List response DTO
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[schema(example = "5f0c7a3e-2b1d-4c6e-9f8a-7d6b5c4a3e2f")]
    pub id: Uuid,
    #[schema(example = "Todo")]
    pub name: String,
    #[schema(example = "67e55044-10b1-426f-9247-bb680e5fe0c8")]
    pub board_id: Uuid,
}

impl From<List> for ListResponse {
    fn from(l: List) -> Self {
        Self {
            id: l.id,
            name: l.name,
            board_id: l.board_id,
        }
    }
}

/// Create list request body
///
/// Schema only; bodies are checked by the `Validate` rules before a
/// handler runs.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateListRequest {
    #[schema(example = "Todo")]
    pub name: String,
    #[schema(example = "67e55044-10b1-426f-9247-bb680e5fe0c8")]
    pub board_id: Uuid,
}

/// Query parameters for listing lists
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only return lists of this board
    pub board_id: Option<String>,
}

async fn lists_of<D: Database>(
    state: &AppState<D>,
    board_id: Option<Id>,
) -> Result<Json<Vec<ListResponse>>, HandlerError> {
    let lists = state
        .db()
        .lists()
        .list(board_id)
        .await
        .map_err(HandlerError::read)?;

    Ok(Json(lists.into_iter().map(ListResponse::from).collect()))
}

/// List all lists
///
/// Optionally filtered to one board with `?boardId=`.
#[utoipa::path(
    get,
    path = "/lists",
    tag = "lists",
    params(ListQuery),
    responses(
        (status = 200, description = "List of lists", body = Vec<ListResponse>),
        (status = 400, description = "Invalid boardId or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_lists<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ListResponse>>, HandlerError> {
    let Query(query) = query?;
    let board_id = match query.board_id.as_deref() {
        None => None,
        Some(raw) => Some(parse_uuid(raw).ok_or_else(|| {
            HandlerError::BadRequest(format!("'{}' is not a valid UUID", raw))
        })?),
    };

    lists_of(&state, board_id).await
}

/// List the lists of one board
#[utoipa::path(
    get,
    path = "/boards/{boardId}/lists",
    tag = "lists",
    params(
        ("boardId" = Uuid, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Lists of the board", body = Vec<ListResponse>),
        (status = 400, description = "Invalid boardId or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_board_lists<D: Database>(
    State(state): State<AppState<D>>,
    PathUuid(board_id): PathUuid,
) -> Result<Json<Vec<ListResponse>>, HandlerError> {
    lists_of(&state, Some(board_id)).await
}

/// Create a list
#[utoipa::path(
    post,
    path = "/lists",
    tag = "lists",
    request_body = CreateListRequest,
    responses(
        (status = 201, description = "List created", body = ListResponse),
        (status = 422, description = "Validation or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_list<D: Database>(
    State(state): State<AppState<D>>,
    ValidatedJson(input): ValidatedJson<NewList>,
) -> Result<(StatusCode, Json<ListResponse>), HandlerError> {
    let list = state
        .db()
        .lists()
        .create(&input)
        .await
        .map_err(HandlerError::write)?;

    Ok((StatusCode::CREATED, Json(ListResponse::from(list))))
}
