//! PostgreSQL CardUserRepository implementation.

use sqlx::{PgPool, Row};

use crate::db::{CardUser, CardUserRepository, DbResult};

/// Card-user link repository
pub struct PgCardUserRepository<'a> {
    pub(crate) pool: &'a PgPool,
}

impl CardUserRepository for PgCardUserRepository<'_> {
    async fn create(&self, link: &CardUser) -> DbResult<CardUser> {
        let row = sqlx::query(
            r#"
            INSERT INTO card_users (card_id, user_id, is_owner)
            VALUES ($1, $2, $3)
            RETURNING card_id, user_id, is_owner
            "#,
        )
        .bind(link.card_id)
        .bind(link.user_id)
        .bind(link.is_owner)
        .fetch_one(self.pool)
        .await?;

        Ok(CardUser {
            card_id: row.try_get("card_id")?,
            user_id: row.try_get("user_id")?,
            is_owner: row.try_get("is_owner")?,
        })
    }
}
