use crate::config::Config;
use crate::middleware::{
    cors_layer, error_envelope_middleware, panic_response, payload_limit_middleware,
    request_id_middleware, request_logger_middleware,
};
use axum::middleware;
use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;

use super::health;
use super::spa;
use super::{not_found, AppState};

/// Routers mounted under the API prefixes. Each module owns its subtree;
/// a module left at its default mounts nothing.
#[derive(Default)]
pub struct ApiRoutes {
    /// Mounted at `/api/auth`
    pub auth: Router<Arc<AppState>>,
    /// Mounted at `/api/tenders`
    pub tenders: Router<Arc<AppState>>,
    /// Mounted at `/api/websites`
    pub websites: Router<Arc<AppState>>,
    /// Mounted at `/api/leads`
    pub leads: Router<Arc<AppState>>,
}

/// Create application router
pub fn create_router(state: Arc<AppState>, config: &Config, api_routes: ApiRoutes) -> Router {
    // Unmatched /api paths stop here so the frontend fallback never sees them
    let api = Router::new()
        .nest("/auth", api_routes.auth)
        .nest("/tenders", api_routes.tenders)
        .nest("/websites", api_routes.websites)
        .nest("/leads", api_routes.leads)
        .route("/health", get(health::health_check))
        .fallback(not_found);

    // The nested router does not match "/api/" itself
    let mut app = Router::new()
        .nest("/api", api)
        .route("/api/", any(not_found));

    if config.environment.is_production() {
        app = app.fallback(spa::spa_fallback(&config.frontend));
    }

    // Layers wrap outward: the last one added sees the request first
    let mut app = app
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .layer(middleware::from_fn(payload_limit_middleware))
        .layer(middleware::from_fn_with_state(
            config.environment.clone(),
            error_envelope_middleware,
        ));

    if !config.environment.is_production() {
        app = app.layer(middleware::from_fn(request_logger_middleware));
    }

    app.layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&config.cors))
        .with_state(state)
}
