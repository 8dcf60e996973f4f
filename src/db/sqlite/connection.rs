//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::{
    SqliteBoardRepository, SqliteCardRepository, SqliteCardUserRepository, SqliteListRepository,
    SqliteUserRepository,
};
use crate::db::{Database, DbError, DbResult};

/// Connections kept by a file-backed pool.
const FILE_MAX_CONNECTIONS: u32 = 5;

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (or create) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(FILE_MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // Each connection to :memory: is a separate database, so the pool
        // holds exactly one connection and never recycles it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    ///
    /// This is useful for testing and advanced operations that need
    /// direct database access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Users<'a> = SqliteUserRepository<'a>;
    type Boards<'a> = SqliteBoardRepository<'a>;
    type Lists<'a> = SqliteListRepository<'a>;
    type Cards<'a> = SqliteCardRepository<'a>;
    type CardUsers<'a> = SqliteCardUserRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("data/sql/sqlite").run(&self.pool).await?;
        Ok(())
    }

    fn users(&self) -> Self::Users<'_> {
        SqliteUserRepository { pool: &self.pool }
    }

    fn boards(&self) -> Self::Boards<'_> {
        SqliteBoardRepository { pool: &self.pool }
    }

    fn lists(&self) -> Self::Lists<'_> {
        SqliteListRepository { pool: &self.pool }
    }

    fn cards(&self) -> Self::Cards<'_> {
        SqliteCardRepository { pool: &self.pool }
    }

    fn card_users(&self) -> Self::CardUsers<'_> {
        SqliteCardUserRepository { pool: &self.pool }
    }
}
