//! Row mapping shared by the PostgreSQL repositories.

use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::db::{Card, DbResult, User};

/// Map `id, name, email` columns to a [`User`].
///
/// `prefix` selects aliased columns, e.g. `creator_` for `creator_id`.
pub fn user_from_row(row: &PgRow, prefix: &str) -> DbResult<User> {
    Ok(User {
        id: row.try_get(format!("{}id", prefix).as_str())?,
        name: row.try_get(format!("{}name", prefix).as_str())?,
        email: row.try_get(format!("{}email", prefix).as_str())?,
    })
}

/// Map `id, title, description, due_date, list_id` columns to a [`Card`].
pub fn card_from_row(row: &PgRow) -> DbResult<Card> {
    Ok(Card {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        due_date: row.try_get("due_date")?,
        list_id: row.try_get("list_id")?,
    })
}
