//! Server and database settings.
//!
//! Every setting can be given as a flag or through the environment; the
//! binary loads an optional `.env` file before parsing.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser};
use sqlx::postgres::PgConnectOptions;

use crate::api;

#[derive(Debug, Clone, Parser)]
#[command(name = "kanban-api")]
#[command(author, version, about = "Kanban board API server", long_about = None)]
pub struct Settings {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl Settings {
    /// Bind address for the HTTP server.
    pub fn api_config(&self) -> api::Config {
        api::Config {
            host: self.host,
            port: self.port,
        }
    }
}

/// Connection settings for the backing store.
#[derive(Debug, Clone, Args)]
pub struct DatabaseArgs {
    /// PostgreSQL user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// PostgreSQL host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// PostgreSQL database name
    #[arg(long, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// PostgreSQL password
    #[arg(long, env = "DB_PASS", hide_env_values = true)]
    pub db_pass: Option<String>,

    /// PostgreSQL port
    #[arg(long, env = "DB_PORT", default_value = "5432")]
    pub db_port: u16,

    /// Use a SQLite database file instead of PostgreSQL
    #[arg(long, env = "DB_SQLITE_PATH")]
    pub sqlite: Option<PathBuf>,
}

/// Which store the server runs against.
#[derive(Debug, Clone)]
pub enum Backend {
    Postgres(PgConnectOptions),
    Sqlite(PathBuf),
}

impl DatabaseArgs {
    /// Pick the backend: SQLite when a file is given, PostgreSQL otherwise.
    pub fn backend(&self) -> Backend {
        match &self.sqlite {
            Some(path) => Backend::Sqlite(path.clone()),
            None => Backend::Postgres(self.pg_connect_options()),
        }
    }

    /// PostgreSQL options from the `DB_*` settings. Unset values fall back
    /// to libpq defaults.
    pub fn pg_connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port);

        if let Some(user) = &self.db_user {
            options = options.username(user);
        }
        if let Some(pass) = &self.db_pass {
            options = options.password(pass);
        }
        if let Some(name) = &self.db_name {
            options = options.database(name);
        }

        options
    }
}
