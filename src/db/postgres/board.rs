//! PostgreSQL BoardRepository implementation.
//!
//! Board creation is atomic with its admin link (transaction).

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::db::{Board, BoardRepository, BoardWithAdmin, DbResult, NewBoard};

/// Board repository
pub struct PgBoardRepository<'a> {
    pub(crate) pool: &'a PgPool,
}

impl BoardRepository for PgBoardRepository<'_> {
    async fn create(&self, board: &NewBoard) -> DbResult<Board> {
        // Dropping `tx` without commit rolls back both inserts
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("INSERT INTO boards (id, name) VALUES ($1, $2) RETURNING id, name")
            .bind(Uuid::new_v4())
            .bind(&board.name)
            .fetch_one(&mut *tx)
            .await?;

        let created = Board {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        };

        sqlx::query("INSERT INTO board_users (board_id, user_id, is_admin) VALUES ($1, $2, $3)")
            .bind(created.id)
            .bind(board.admin_user_id)
            .bind(true)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list(&self) -> DbResult<Vec<BoardWithAdmin>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.name, bu.user_id AS admin_user_id
            FROM boards b
            JOIN board_users bu ON bu.board_id = b.id
            WHERE bu.is_admin IS TRUE
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(BoardWithAdmin {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    admin_user_id: row.try_get("admin_user_id")?,
                })
            })
            .collect()
    }
}
