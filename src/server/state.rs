//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `chrono::Duration` is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Lifetime of access tokens issued on login.
    pub token_ttl: chrono::Duration,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_ttl` - Lifetime of issued access tokens
    pub fn new(db: DatabaseConnection, token_ttl: chrono::Duration) -> Self {
        Self { db, token_ttl }
    }
}
