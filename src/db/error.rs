//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(kanban::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Invalid data: {message}")]
    #[diagnostic(code(kanban::db::invalid_data))]
    InvalidData { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(kanban::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(kanban::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(kanban::db::connection_error),
        help("Check the DB_* settings or the --sqlite path")
    )]
    Connection { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(kanban::db::constraint))]
    Constraint { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(ref db_err)
                if db_err.is_foreign_key_violation()
                    || db_err.is_unique_violation()
                    || db_err.is_check_violation() =>
            {
                DbError::Constraint {
                    message: db_err.message().to_string(),
                }
            }
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut => {
                DbError::Connection {
                    message: e.to_string(),
                }
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => DbError::InvalidData {
                message: e.to_string(),
            },
            _ => DbError::Database {
                message: e.to_string(),
            },
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        DbError::Migration {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
