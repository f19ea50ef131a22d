//! Process startup for both hosting modes.
//!
//! - Listener mode binds a TCP socket, connects the database, prints the
//!   startup banner and serves until Ctrl+C / SIGTERM.
//! - Serverless mode connects the database once per cold start and hands
//!   the router to the function runtime, which owns the socket. Events are
//!   decoded by `lambda_http`: API Gateway (REST and HTTP), ALB and Lambda
//!   function URL payloads. On a host with another invocation protocol, run
//!   in listener mode instead.

use crate::config::{Config, Environment, StartupMode};
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::routes::{self, ApiRoutes};
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

const BANNER_TITLE: &str = "HPCL Lead Intelligence Agent Server";
const BANNER_WIDTH: usize = 58;

/// Start the application in the mode selected by configuration.
///
/// # Errors
///
/// Fails if the database handle cannot be created or connected, if the
/// listener cannot be bound, or if the server or function runtime stops
/// with an error.
pub async fn run(config: Config, api_routes: ApiRoutes) -> AppResult<()> {
    match config.startup {
        StartupMode::Serverless => run_serverless(config, api_routes).await,
        StartupMode::Listen => run_listener(config, api_routes).await,
    }
}

/// Build the shared state and router from configuration
pub fn build_app(config: &Config, api_routes: ApiRoutes) -> AppResult<(Arc<AppState>, axum::Router)> {
    let database = Database::new(&config.database)?;

    let state = Arc::new(AppState {
        database,
        port: config.server.port,
        environment: config.environment.clone(),
    });

    let app = routes::create_router(state.clone(), config, api_routes);
    Ok((state, app))
}

async fn run_listener(config: Config, api_routes: ApiRoutes) -> AppResult<()> {
    let (state, app) = build_app(&config, api_routes)?;

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await.map_err(|source| AppError::Bind {
        addr: addr.clone(),
        source,
    })?;

    info!("Server listening on {}", addr);

    state.database.connect().await?;

    println!("{}", startup_banner(config.server.port, &config.environment));

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    info!("Server shutdown complete");
    Ok(())
}

async fn run_serverless(config: Config, api_routes: ApiRoutes) -> AppResult<()> {
    info!("Starting in serverless mode");

    let (state, app) = build_app(&config, api_routes)?;
    state.database.connect().await?;

    lambda_http::run(app)
        .await
        .map_err(|e| AppError::Serverless(e.to_string()))
}

/// Render the listener-mode startup banner.
pub fn startup_banner(port: u16, environment: &Environment) -> String {
    let rows = [
        "Status: Running".to_string(),
        format!("Port: {}", port),
        format!("Environment: {}", environment),
        format!("API Base: http://localhost:{}/api", port),
        format!("Health Check: http://localhost:{}/api/health", port),
    ];

    let rule = "═".repeat(BANNER_WIDTH);
    let line = |text: &str| format!("║  {:<width$}║", text, width = BANNER_WIDTH - 2);

    let mut banner = Vec::with_capacity(rows.len() + 4);
    banner.push(format!("╔{}╗", rule));
    banner.push(line(BANNER_TITLE));
    banner.push(format!("╠{}╣", rule));
    banner.extend(rows.iter().map(|row| line(row.as_str())));
    banner.push(format!("╚{}╝", rule));

    banner.join("\n")
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails; the process could not be
/// stopped gracefully without it.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received");
}
