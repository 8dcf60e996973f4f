//! Shared helper functions for SQLite repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use crate::db::{Card, DbError, DbResult, User};

/// Read a TEXT column holding a hyphenated UUID.
pub fn parse_id(row: &SqliteRow, column: &str) -> DbResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| DbError::InvalidData {
        message: format!("column '{}' holds invalid UUID '{}': {}", column, raw, e),
    })
}

/// Map `id, name, email` columns to a [`User`].
///
/// `prefix` selects aliased columns, e.g. `creator_` for `creator_id`.
pub fn user_from_row(row: &SqliteRow, prefix: &str) -> DbResult<User> {
    Ok(User {
        id: parse_id(row, &format!("{}id", prefix))?,
        name: row.try_get(format!("{}name", prefix).as_str())?,
        email: row.try_get(format!("{}email", prefix).as_str())?,
    })
}

/// Map `id, title, description, due_date, list_id` columns to a [`Card`].
pub fn card_from_row(row: &SqliteRow) -> DbResult<Card> {
    Ok(Card {
        id: parse_id(row, "id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        due_date: row.try_get("due_date")?,
        list_id: parse_id(row, "list_id")?,
    })
}
