//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.
//!
//! Methods return `Send` futures so handlers generic over [`Database`]
//! can run on a multi-threaded runtime.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{
        Board, BoardWithAdmin, Card, CardMember, CardUser, CardWithCreator, Id, List, NewBoard,
        NewCard, NewList, NewUser, User,
    },
};

/// Repository for User operations.
pub trait UserRepository {
    /// Insert a user and return the stored row.
    fn create(&self, user: &NewUser) -> impl Future<Output = DbResult<User>> + Send;

    /// Get all users.
    fn list(&self) -> impl Future<Output = DbResult<Vec<User>>> + Send;
}

/// Repository for Board operations.
pub trait BoardRepository {
    /// Create a board and its admin link in one transaction.
    ///
    /// Either both the board row and exactly one `board_users` row with
    /// `is_admin = true` exist afterwards, or neither does.
    fn create(&self, board: &NewBoard) -> impl Future<Output = DbResult<Board>> + Send;

    /// Get all boards joined to their admin user.
    fn list(&self) -> impl Future<Output = DbResult<Vec<BoardWithAdmin>>> + Send;
}

/// Repository for List operations.
pub trait ListRepository {
    /// Insert a list and return the stored row.
    fn create(&self, list: &NewList) -> impl Future<Output = DbResult<List>> + Send;

    /// Get all lists, or only those of `board_id` when given.
    fn list(&self, board_id: Option<Id>) -> impl Future<Output = DbResult<Vec<List>>> + Send;
}

/// Repository for Card operations.
pub trait CardRepository {
    /// Create a card and its owner link in one transaction.
    ///
    /// Either both the card row and exactly one `card_users` row with
    /// `is_owner = true` exist afterwards, or neither does.
    fn create(&self, card: &NewCard) -> impl Future<Output = DbResult<Card>> + Send;

    /// Get all cards.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Card>>> + Send;

    /// Get a card joined to its owner.
    ///
    /// Returns `DbError::NotFound` when the card does not exist or has no
    /// owner link.
    fn get_with_creator(
        &self,
        card_id: Id,
    ) -> impl Future<Output = DbResult<CardWithCreator>> + Send;

    /// Get every user linked to a card.
    fn members(&self, card_id: Id) -> impl Future<Output = DbResult<Vec<CardMember>>> + Send;
}

/// Repository for CardUser link operations.
pub trait CardUserRepository {
    /// Insert a card-user link and return the stored row.
    fn create(&self, link: &CardUser) -> impl Future<Output = DbResult<CardUser>> + Send;
}

/// Combined database interface.
///
/// Repositories are cheap borrowed views over the backend's pool.
pub trait Database: Send + Sync {
    type Users<'a>: UserRepository + Send + Sync
    where
        Self: 'a;
    type Boards<'a>: BoardRepository + Send + Sync
    where
        Self: 'a;
    type Lists<'a>: ListRepository + Send + Sync
    where
        Self: 'a;
    type Cards<'a>: CardRepository + Send + Sync
    where
        Self: 'a;
    type CardUsers<'a>: CardUserRepository + Send + Sync
    where
        Self: 'a;

    /// Apply the bundled schema.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the user repository.
    fn users(&self) -> Self::Users<'_>;

    /// Get the board repository.
    fn boards(&self) -> Self::Boards<'_>;

    /// Get the list repository.
    fn lists(&self) -> Self::Lists<'_>;

    /// Get the card repository.
    fn cards(&self) -> Self::Cards<'_>;

    /// Get the card-user link repository.
    fn card_users(&self) -> Self::CardUsers<'_>;
}
