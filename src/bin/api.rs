//! Kanban API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use clap::Parser;
use kanban::api::{self, ApiError};
use kanban::config::{Backend, Settings};
use kanban::db::{Database, DbError, PostgresDatabase, SqliteDatabase};
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(kanban::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(kanban::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(kanban::binary::api))]
    Api(#[from] ApiError),
}

/// Apply the schema, then hand the database to the API layer.
async fn serve<D: Database + 'static>(settings: &Settings, db: D) -> Result<(), BinaryError> {
    db.migrate().await?;
    info!("Database migrations complete");

    api::run(settings.api_config(), db).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    dotenvy::dotenv().ok();
    let settings = Settings::parse();
    api::init_tracing();

    match settings.database.backend() {
        Backend::Sqlite(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            info!("Opening SQLite database at {:?}", path);
            let db = SqliteDatabase::open(&path).await?;
            serve(&settings, db).await
        }
        Backend::Postgres(options) => {
            info!(
                "Connecting to PostgreSQL at {}:{}",
                options.get_host(),
                options.get_port()
            );
            let db = PostgresDatabase::connect(options).await?;
            serve(&settings, db).await
        }
    }
}
