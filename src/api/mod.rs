//! HTTP API server.
//!
//! The API layer is generic over [`Database`]; the binary decides which
//! backend to hand in.

mod error;
mod extract;
pub mod handlers;
pub mod routes;
mod state;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod routes_test;
#[cfg(test)]
mod test_support;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ErrorResponse, HandlerError};
pub use extract::{PathUuid, ValidatedJson};
pub use state::AppState;

use crate::db::Database;

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

/// Server startup and runtime failures.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(kanban::api::bind), help("Is another process using the port?"))]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(kanban::api::serve))]
    Serve(std::io::Error),
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kanban=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration and database.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let state = AppState::new(db);
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
