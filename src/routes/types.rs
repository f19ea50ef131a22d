use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub message: String,
    pub port: u16,
    pub environment: String,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
}
