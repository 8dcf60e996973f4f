//! SQLite CardUserRepository implementation.

use sqlx::{Row, SqlitePool};

use super::helpers::parse_id;
use crate::db::{CardUser, CardUserRepository, DbResult};

/// SQLx-backed card-user link repository.
pub struct SqliteCardUserRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl CardUserRepository for SqliteCardUserRepository<'_> {
    async fn create(&self, link: &CardUser) -> DbResult<CardUser> {
        let row = sqlx::query(
            "INSERT INTO card_users (card_id, user_id, is_owner) VALUES (?, ?, ?)
             RETURNING card_id, user_id, is_owner",
        )
        .bind(link.card_id.to_string())
        .bind(link.user_id.to_string())
        .bind(link.is_owner)
        .fetch_one(self.pool)
        .await?;

        Ok(CardUser {
            card_id: parse_id(&row, "card_id")?,
            user_id: parse_id(&row, "user_id")?,
            is_owner: row.try_get("is_owner")?,
        })
    }
}
