//! Domain models for the kanban database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application. `New*` types are validated inputs
//! for the insert paths; ids are assigned by the repository.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Id type used for all entities.
pub type Id = Uuid;

/// A person who can administer boards and own or join cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: Option<String>,
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

/// Top-level container owning lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: Id,
    pub name: String,
}

/// Validated input for creating a board together with its admin link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    pub name: String,
    pub admin_user_id: Id,
}

/// A board joined to its admin user (board_users row with is_admin set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardWithAdmin {
    pub id: Id,
    pub name: String,
    pub admin_user_id: Id,
}

/// Grouping of cards within a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub id: Id,
    pub name: String,
    pub board_id: Id,
}

/// Validated input for creating a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub name: String,
    pub board_id: Id,
}

/// A task unit belonging to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: Id,
}

/// Validated input for creating a card; `user_id` becomes the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub list_id: Id,
    pub user_id: Id,
}

/// Membership/ownership link between a user and a card.
///
/// Has no generated columns, so the same type serves as insert input
/// and stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardUser {
    pub card_id: Id,
    pub user_id: Id,
    pub is_owner: bool,
}

/// A card joined to the user recorded as its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardWithCreator {
    pub card: Card,
    pub creator: User,
}

/// A user linked to a card, as listed in the card's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMember {
    pub user: User,
    pub is_owner: bool,
}
