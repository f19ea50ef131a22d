use crate::routes::types::HealthCheckResponse;
use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use super::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
        port: state.port,
        environment: state.environment.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
