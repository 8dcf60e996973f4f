//! PostgreSQL ListRepository implementation.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db::{DbResult, Id, List, ListRepository, NewList};

/// List repository
pub struct PgListRepository<'a> {
    pub(crate) pool: &'a PgPool,
}

fn list_from_row(row: &PgRow) -> DbResult<List> {
    Ok(List {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        board_id: row.try_get("board_id")?,
    })
}

impl ListRepository for PgListRepository<'_> {
    async fn create(&self, list: &NewList) -> DbResult<List> {
        let row = sqlx::query(
            "INSERT INTO lists (id, name, board_id) VALUES ($1, $2, $3) RETURNING id, name, board_id",
        )
        .bind(Uuid::new_v4())
        .bind(&list.name)
        .bind(list.board_id)
        .fetch_one(self.pool)
        .await?;

        list_from_row(&row)
    }

    async fn list(&self, board_id: Option<Id>) -> DbResult<Vec<List>> {
        // NULL matches every board
        let rows = sqlx::query(
            "SELECT id, name, board_id FROM lists WHERE $1::uuid IS NULL OR board_id = $1",
        )
        .bind(board_id)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(list_from_row).collect()
    }
}
