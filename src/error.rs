use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Environment variable missing: {0}")]
    MissingEnvVar(String),

    #[error("Failed to bind to address {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Serverless runtime error: {0}")]
    Serverless(String),

    #[error("request entity too large")]
    PayloadTooLarge,

    #[error("{0}")]
    Internal(String),
}

/// Marker left in the extensions of a response produced by an unhandled
/// failure. The error middleware turns marked responses into the JSON
/// envelope.
#[derive(Debug, Clone)]
pub struct UnhandledError(pub String);

/// Every `AppError` reaching a client is an unhandled failure: a bare 500
/// carrying the message for the error middleware to render.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response
            .extensions_mut()
            .insert(UnhandledError(self.to_string()));
        response
    }
}

/// Body of every 500 response
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    pub fn internal(detail: Option<String>) -> Self {
        Self {
            success: false,
            message: "Internal server error",
            error: detail,
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;
