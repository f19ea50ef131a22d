use crate::config::CorsConfig;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// Build the CORS layer.
///
/// An explicit origin list is served with credentials enabled. A wildcard
/// origin is served without credentials: `Access-Control-Allow-Origin: *`
/// combined with credentials is rejected by browsers and by `CorsLayer`.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request());

    if config.is_wildcard() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|s| s.parse::<HeaderValue>().ok())
            .collect();

        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}

