//! Board handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::{AppState, ErrorResponse, HandlerError, ValidatedJson};
use crate::db::{Board, BoardRepository, BoardWithAdmin, Database, NewBoard};

/// Board response DTO
#[derive(Serialize, ToSchema)]
pub struct BoardResponse {
    #[schema(example = "67e55044-10b1-426f-9247-bb680e5fe0c8")]
    pub id: Uuid,
    #[schema(example = "Roadmap")]
    pub name: String,
}

impl From<Board> for BoardResponse {
    fn from(b: Board) -> Self {
        Self {
            id: b.id,
            name: b.name,
        }
    }
}

/// Board joined to its admin user
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardWithAdminResponse {
    #[schema(example = "67e55044-10b1-426f-9247-bb680e5fe0c8")]
    pub id: Uuid,
    #[schema(example = "Roadmap")]
    pub name: String,
    #[schema(example = "936da01f-9abd-4d9d-80c7-02af85c822a8")]
    pub admin_user_id: Uuid,
}

impl From<BoardWithAdmin> for BoardWithAdminResponse {
    fn from(b: BoardWithAdmin) -> Self {
        Self {
            id: b.id,
            name: b.name,
            admin_user_id: b.admin_user_id,
        }
    }
}

/// Create board request body
///
/// Schema only; bodies are checked by the `Validate` rules before a
/// handler runs.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    #[schema(example = "Roadmap")]
    pub name: String,
    /// User recorded as the board's admin
    #[schema(example = "936da01f-9abd-4d9d-80c7-02af85c822a8")]
    pub admin_user_id: Uuid,
}

/// List all boards
///
/// Each board is returned with the user holding its admin link.
#[utoipa::path(
    get,
    path = "/boards",
    tag = "boards",
    responses(
        (status = 200, description = "List of boards", body = Vec<BoardWithAdminResponse>),
        (status = 400, description = "Store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_boards<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<BoardWithAdminResponse>>, HandlerError> {
    let boards = state
        .db()
        .boards()
        .list()
        .await
        .map_err(HandlerError::read)?;

    Ok(Json(
        boards.into_iter().map(BoardWithAdminResponse::from).collect(),
    ))
}

/// Create a board
///
/// The board and its admin link are written in one transaction; if the
/// admin user does not exist, neither is stored.
#[utoipa::path(
    post,
    path = "/boards",
    tag = "boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board created", body = BoardResponse),
        (status = 422, description = "Validation or store error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_board<D: Database>(
    State(state): State<AppState<D>>,
    ValidatedJson(input): ValidatedJson<NewBoard>,
) -> Result<(StatusCode, Json<BoardResponse>), HandlerError> {
    let board = state
        .db()
        .boards()
        .create(&input)
        .await
        .map_err(HandlerError::write)?;

    Ok((StatusCode::CREATED, Json(BoardResponse::from(board))))
}
