use crate::config::FrontendConfig;
use axum::routing::{get_service, MethodRouter};
use tower_http::services::{ServeDir, ServeFile};

use super::not_found;

/// Static file service for the frontend bundle.
///
/// Paths without a matching file get the entry document with status 200,
/// leaving routing to the client.
pub fn spa_service(config: &FrontendConfig) -> ServeDir<ServeFile> {
    ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.entry_document()))
}

/// Catch-all for production: GET and HEAD go to the bundle, any other
/// method on an unclaimed path is a 404.
pub fn spa_fallback<S>(config: &FrontendConfig) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get_service(spa_service(config)).fallback(not_found)
}
