use crate::config::Environment;
use crate::error::{AppError, ErrorEnvelope, UnhandledError};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

/// Terminal error handler.
///
/// Responses marked with [`UnhandledError`] are logged and replaced with the
/// JSON envelope; the failure message is only exposed outside production.
/// Everything else passes through unchanged.
pub async fn error_envelope_middleware(
    State(environment): State<Environment>,
    req: Request,
    next: Next,
) -> Response {
    let response = next.run(req).await;

    let Some(UnhandledError(message)) = response.extensions().get::<UnhandledError>().cloned()
    else {
        return response;
    };

    tracing::error!(error = %message, "Server Error");

    let detail = (!environment.is_production()).then_some(message);
    ErrorEnvelope::internal(detail).into_response()
}

/// Route body-size rejections through the error handler.
///
/// Sits directly outside `RequestBodyLimitLayer`. A 413 from the layer, or
/// from an extractor that hit the limit while reading, becomes a marked
/// failure so the client gets the JSON envelope.
pub async fn payload_limit_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if response.status() == StatusCode::PAYLOAD_TOO_LARGE
        && response.extensions().get::<UnhandledError>().is_none()
    {
        return AppError::PayloadTooLarge.into_response();
    }

    response
}

/// Turn a caught panic into a marked 500 so it gets the same treatment as a
/// returned error
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(message).into_response()
}
