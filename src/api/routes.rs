//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, BoardResponse, BoardWithAdminResponse, CardCreatorResponse, CardMemberResponse,
    CardResponse, CardUserLink, CreateBoardRequest, CreateCardRequest, CreateListRequest,
    CreateUserRequest, HealthResponse, ListResponse, UserResponse,
};
use super::state::AppState;
use super::ErrorResponse;
use crate::db::Database;
use crate::validation::Violation;

/// Build routes with generic database type.
///
/// Applies the turbofish to every handler so each route line stays a
/// single `method "path" => handler` entry.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kanban API",
        version = "0.1.0",
        description = "CRUD API for users, boards, lists and cards",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_users,
        handlers::create_user,
        handlers::list_boards,
        handlers::create_board,
        handlers::list_board_lists,
        handlers::list_lists,
        handlers::create_list,
        handlers::list_cards,
        handlers::create_card,
        handlers::get_card_creator,
        handlers::list_card_users,
        handlers::create_card_user,
    ),
    components(
        schemas(
            HealthResponse,
            UserResponse,
            CreateUserRequest,
            BoardResponse,
            BoardWithAdminResponse,
            CreateBoardRequest,
            ListResponse,
            CreateListRequest,
            CardResponse,
            CardCreatorResponse,
            CardMemberResponse,
            CreateCardRequest,
            CardUserLink,
            ErrorResponse,
            Violation,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "users", description = "User endpoints"),
        (name = "boards", description = "Board endpoints"),
        (name = "lists", description = "List endpoints"),
        (name = "cards", description = "Card and card membership endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = Router::new().route("/health", get(handlers::health));

    // `get`/`post` on the same path are merged by axum
    let user_routes = routes!(D => {
        get "/users" => handlers::list_users,
        post "/users" => handlers::create_user,
    });

    let board_routes = routes!(D => {
        get "/boards" => handlers::list_boards,
        post "/boards" => handlers::create_board,
        get "/boards/{boardId}/lists" => handlers::list_board_lists,
    });

    let list_routes = routes!(D => {
        get "/lists" => handlers::list_lists,
        post "/lists" => handlers::create_list,
    });

    let card_routes = routes!(D => {
        get "/cards" => handlers::list_cards,
        post "/cards" => handlers::create_card,
        get "/cards/{cardId}/creator" => handlers::get_card_creator,
        get "/cards/{cardId}/users" => handlers::list_card_users,
        post "/card-users" => handlers::create_card_user,
    });

    system_routes
        .merge(user_routes)
        .merge(board_routes)
        .merge(list_routes)
        .merge(card_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
