//! PostgreSQL implementation of the database traits.
//!
//! This is the production backend. UUID and TIMESTAMPTZ columns map
//! directly onto `uuid::Uuid` and `chrono::DateTime<Utc>`.

mod board;
mod card;
mod card_user;
mod connection;
mod helpers;
mod list;
mod user;


pub use board::PgBoardRepository;
pub use card::PgCardRepository;
pub use card_user::PgCardUserRepository;
pub use connection::PostgresDatabase;
pub use list::PgListRepository;
pub use user::PgUserRepository;
