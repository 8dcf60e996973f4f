//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so handlers run unchanged against SQLite
/// or PostgreSQL.
pub struct AppState<D: Database> {
    db: Arc<D>,
}

// Manual Clone: only the Arc is cloned, D itself need not be Clone
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AppState<D> {
    pub fn new(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }
}
