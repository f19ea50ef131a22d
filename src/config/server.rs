use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to in listener mode (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to bind to, also reported by the health check
    pub port: u16,

    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.body_limit_bytes == 0 {
            return Err("BODY_LIMIT_BYTES must be greater than 0".to_string());
        }

        Ok(())
    }
}
