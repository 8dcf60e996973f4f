//! SQLite UserRepository implementation.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::helpers::user_from_row;
use crate::db::{DbResult, NewUser, User, UserRepository};

/// SQLx-backed user repository.
pub struct SqliteUserRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl UserRepository for SqliteUserRepository<'_> {
    async fn create(&self, user: &NewUser) -> DbResult<User> {
        let row = sqlx::query(
            "INSERT INTO users (id, name, email) VALUES (?, ?, ?) RETURNING id, name, email",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(self.pool)
        .await?;

        user_from_row(&row, "")
    }

    async fn list(&self) -> DbResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name, email FROM users")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(|row| user_from_row(row, "")).collect()
    }
}
