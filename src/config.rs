mod cors;
mod database;
mod frontend;
mod runtime;
mod server;

pub use cors::{CorsConfig, LOCAL_DEV_ORIGINS};
pub use database::DatabaseConfig;
pub use frontend::FrontendConfig;
pub use runtime::{Environment, StartupMode};
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
    pub startup: StartupMode,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub frontend: FrontendConfig,
}

impl Config {
    /// Load configuration from environment variables (and `.env` when present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset and empty values are treated alike, so `PORT=` falls back to the
    /// default just as a missing `PORT` does.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let environment = Environment::from_node_env(var("NODE_ENV"));
        let startup = StartupMode::from_flag(var("VERCEL"));

        let host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", var("PORT"), 5001)?;
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", var("BODY_LIMIT_BYTES"), 100 * 1024)?;

        let database_url =
            var("DATABASE_URL").ok_or_else(|| AppError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 10)?;
        let min_connections = parse_or("DB_MIN_CONNECTIONS", var("DB_MIN_CONNECTIONS"), 1)?;
        let acquire_timeout_seconds = parse_or(
            "DB_ACQUIRE_TIMEOUT_SECONDS",
            var("DB_ACQUIRE_TIMEOUT_SECONDS"),
            30,
        )?;

        let cors = CorsConfig::for_environment(&environment, var("FRONTEND_URL"));

        let dist_dir = var("FRONTEND_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("frontend/dist"));

        let config = Config {
            server: ServerConfig {
                host,
                port,
                body_limit_bytes,
            },
            environment,
            startup,
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                min_connections,
                acquire_timeout_seconds,
            },
            cors,
            frontend: FrontendConfig { dist_dir },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.server.validate().map_err(AppError::Configuration)?;
        self.database.validate().map_err(AppError::Configuration)?;
        Ok(())
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> AppResult<T> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}
