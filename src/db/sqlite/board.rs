//! SQLite BoardRepository implementation.

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::helpers::parse_id;
use crate::db::{Board, BoardRepository, BoardWithAdmin, DbResult, NewBoard};

/// SQLx-backed board repository.
pub struct SqliteBoardRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl BoardRepository for SqliteBoardRepository<'_> {
    async fn create(&self, board: &NewBoard) -> DbResult<Board> {
        // Dropping `tx` without commit rolls back both inserts
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("INSERT INTO boards (id, name) VALUES (?, ?) RETURNING id, name")
            .bind(Uuid::new_v4().to_string())
            .bind(&board.name)
            .fetch_one(&mut *tx)
            .await?;

        let created = Board {
            id: parse_id(&row, "id")?,
            name: row.try_get("name")?,
        };

        sqlx::query("INSERT INTO board_users (board_id, user_id, is_admin) VALUES (?, ?, ?)")
            .bind(created.id.to_string())
            .bind(board.admin_user_id.to_string())
            .bind(true)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list(&self) -> DbResult<Vec<BoardWithAdmin>> {
        let rows = sqlx::query(
            "SELECT b.id, b.name, bu.user_id AS admin_user_id
             FROM boards b
             JOIN board_users bu ON bu.board_id = b.id
             WHERE bu.is_admin = 1",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(BoardWithAdmin {
                    id: parse_id(row, "id")?,
                    name: row.try_get("name")?,
                    admin_user_id: parse_id(row, "admin_user_id")?,
                })
            })
            .collect()
    }
}
