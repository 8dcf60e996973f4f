//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing the SQLite and PostgreSQL backends to be swapped without
//! changing the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (User, Board, List, Card, CardUser)
//! - `repository`: Trait definitions for data access
//! - `sqlite` / `postgres`: Concrete backends

mod error;
mod models;
mod repository;

pub mod postgres;
pub mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use postgres::PostgresDatabase;
pub use repository::*;
pub use sqlite::SqliteDatabase;
