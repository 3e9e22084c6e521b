//! Application state container shared across Axum route handlers and services.
//!
//! The state is constructed once in `main` (or once per test) and injected via
//! Axum's `State<T>` extractor. Nothing in here is a hidden singleton: the
//! database connection and the mailer are explicit constructor arguments, so
//! tests can substitute an in-memory database and a recording mailer.

use crate::services::email::Mailer;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>) -> Self {
        Self { db, mailer }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection, for async contexts
    /// that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Returns the notification sender.
    pub fn mailer(&self) -> &Arc<dyn Mailer> {
        &self.mailer
    }
}
