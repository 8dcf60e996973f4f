//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module. UUIDs are stored as hyphenated
//! TEXT and parsed back on read.

mod board;
mod card;
mod card_user;
mod connection;
mod helpers;
mod list;
mod user;

#[cfg(test)]
mod card_test;
#[cfg(test)]
mod list_test;

pub use board::SqliteBoardRepository;
pub use card::SqliteCardRepository;
pub use card_user::SqliteCardUserRepository;
pub use connection::SqliteDatabase;
pub use list::SqliteListRepository;
pub use user::SqliteUserRepository;
