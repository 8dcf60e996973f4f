//! SQLite ListRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::helpers::parse_id;
use crate::db::{DbResult, Id, List, ListRepository, NewList};

/// SQLx-backed list repository.
pub struct SqliteListRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn list_from_row(row: &SqliteRow) -> DbResult<List> {
    Ok(List {
        id: parse_id(row, "id")?,
        name: row.try_get("name")?,
        board_id: parse_id(row, "board_id")?,
    })
}

impl ListRepository for SqliteListRepository<'_> {
    async fn create(&self, list: &NewList) -> DbResult<List> {
        let row = sqlx::query(
            "INSERT INTO lists (id, name, board_id) VALUES (?, ?, ?) RETURNING id, name, board_id",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&list.name)
        .bind(list.board_id.to_string())
        .fetch_one(self.pool)
        .await?;

        list_from_row(&row)
    }

    async fn list(&self, board_id: Option<Id>) -> DbResult<Vec<List>> {
        let rows = match board_id {
            Some(board_id) => {
                sqlx::query("SELECT id, name, board_id FROM lists WHERE board_id = ?")
                    .bind(board_id.to_string())
                    .fetch_all(self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT id, name, board_id FROM lists")
                    .fetch_all(self.pool)
                    .await?
            }
        };

        rows.iter().map(list_from_row).collect()
    }
}
