//! PostgreSQL UserRepository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use super::helpers::user_from_row;
use crate::db::{DbResult, NewUser, User, UserRepository};

/// User repository
pub struct PgUserRepository<'a> {
    pub(crate) pool: &'a PgPool,
}

impl UserRepository for PgUserRepository<'_> {
    async fn create(&self, user: &NewUser) -> DbResult<User> {
        let row = sqlx::query(
            "INSERT INTO users (id, name, email) VALUES ($1, $2, $3) RETURNING id, name, email",
        )
        .bind(Uuid::new_v4())
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
