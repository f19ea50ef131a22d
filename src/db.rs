use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Owned handle to the backing store.
///
/// The pool is created without opening a connection so the handle can be
/// placed in application state before the listener is bound; `connect`
/// establishes and verifies the first connection.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a lazily connecting pool from configuration
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| AppError::Configuration(format!("Invalid database URL: {}", e)))?
            .disable_statement_logging();

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    /// Open a connection and check that the server answers
    pub async fn connect(&self) -> AppResult<()> {
        info!("Connecting to database...");
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        info!("Database connected");
        Ok(())
    }

    /// Pool for route modules that query the store
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
