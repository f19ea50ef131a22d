use crate::config::Environment;
use crate::db::Database;

/// Application state shared across all HTTP handlers.
///
/// Wrapped in `Arc` and handed to handlers through Axum's State
/// extraction. Read-only once the server has started.
#[derive(Clone)]
pub struct AppState {
    /// Backing store handle, created once during startup
    pub database: Database,

    /// Configured listen port, reported by the health check
    pub port: u16,

    /// Resolved deployment environment
    pub environment: Environment,
}
