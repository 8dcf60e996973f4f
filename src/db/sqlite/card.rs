//! SQLite CardRepository implementation.

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::helpers::{card_from_row, user_from_row};
use crate::db::{
    Card, CardMember, CardRepository, CardWithCreator, DbError, DbResult, Id, NewCard,
};

/// SQLx-backed card repository.
pub struct SqliteCardRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl CardRepository for SqliteCardRepository<'_> {
    async fn create(&self, card: &NewCard) -> DbResult<Card> {
        // Dropping `tx` without commit rolls back both inserts
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "INSERT INTO cards (id, title, description, due_date, list_id) VALUES (?, ?, ?, ?, ?)
             RETURNING id, title, description, due_date, list_id",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&card.title)
        .bind(&card.description)
        .bind(card.due_date)
        .bind(card.list_id.to_string())
        .fetch_one(&mut *tx)
        .await?;

        let created = card_from_row(&row)?;

        sqlx::query("INSERT INTO card_users (card_id, user_id, is_owner) VALUES (?, ?, ?)")
            .bind(created.id.to_string())
            .bind(card.user_id.to_string())
            .bind(true)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list(&self) -> DbResult<Vec<Card>> {
        let rows = sqlx::query("SELECT id, title, description, due_date, list_id FROM cards")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(card_from_row).collect()
    }

    async fn get_with_creator(&self, card_id: Id) -> DbResult<CardWithCreator> {
        // rowid follows insertion order, so the link written with the card wins
        let row = sqlx::query(
            "SELECT c.id, c.title, c.description, c.due_date, c.list_id,
                    u.id AS creator_id, u.name AS creator_name, u.email AS creator_email
             FROM cards c
             JOIN card_users cu ON cu.card_id = c.id AND cu.is_owner = 1
             JOIN users u ON u.id = cu.user_id
             WHERE c.id = ?
             ORDER BY cu.rowid
             LIMIT 1",
        )
        .bind(card_id.to_string())
        .fetch_optional(self.pool)
        .await?;

        let row = row.ok_or(DbError::NotFound {
            entity_type: "Card".to_string(),
            id: card_id.to_string(),
        })?;

        Ok(CardWithCreator {
            card: card_from_row(&row)?,
            creator: user_from_row(&row, "creator_")?,
        })
    }

    async fn members(&self, card_id: Id) -> DbResult<Vec<CardMember>> {
        let rows = sqlx::query(
            "SELECT u.id, u.name, u.email, cu.is_owner
             FROM card_users cu
             JOIN users u ON u.id = cu.user_id
             WHERE cu.card_id = ?
             ORDER BY cu.is_owner DESC, u.name",
        )
        .bind(card_id.to_string())
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(CardMember {
                    user: user_from_row(row, "")?,
                    is_owner: row.try_get("is_owner")?,
                })
            })
            .collect()
    }
}
