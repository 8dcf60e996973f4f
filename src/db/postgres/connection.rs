//! PostgreSQL connection pool and migration management.

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use super::{
    PgBoardRepository, PgCardRepository, PgCardUserRepository, PgListRepository,
    PgUserRepository,
};
use crate::db::{Database, DbError, DbResult};

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL database implementation.
pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    /// Connect a pool using the given options.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` if the first connection fails.
    pub async fn connect(options: PgConnectOptions) -> DbResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Database for PostgresDatabase {
    type Users<'a> = PgUserRepository<'a>;
    type Boards<'a> = PgBoardRepository<'a>;
    type Lists<'a> = PgListRepository<'a>;
    type Cards<'a> = PgCardRepository<'a>;
    type CardUsers<'a> = PgCardUserRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("data/sql/postgres").run(&self.pool).await?;
        Ok(())
    }

    fn users(&self) -> Self::Users<'_> {
        PgUserRepository { pool: &self.pool }
    }

    fn boards(&self) -> Self::Boards<'_> {
        PgBoardRepository { pool: &self.pool }
    }

    fn lists(&self) -> Self::Lists<'_> {
        PgListRepository { pool: &self.pool }
    }

    fn cards(&self) -> Self::Cards<'_> {
        PgCardRepository { pool: &self.pool }
    }

    fn card_users(&self) -> Self::CardUsers<'_> {
        PgCardUserRepository { pool: &self.pool }
    }
}
