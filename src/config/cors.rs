use super::Environment;
use serde::Deserialize;

/// Frontend dev-server origins accepted outside production.
pub const LOCAL_DEV_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "http://127.0.0.1:5173",
];

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// List of allowed origins for CORS (`["*"]` for all origins)
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Origins for the given environment: the local dev servers outside
    /// production, `FRONTEND_URL` (or `*`) in production.
    pub fn for_environment(environment: &Environment, frontend_url: Option<String>) -> Self {
        let allowed_origins = if environment.is_production() {
            vec![frontend_url.unwrap_or_else(|| "*".to_string())]
        } else {
            LOCAL_DEV_ORIGINS.iter().map(|o| o.to_string()).collect()
        };

        Self { allowed_origins }
    }

    pub fn is_wildcard(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(name: &str) -> Environment {
        Environment::from_node_env(Some(name.to_string()))
    }

    #[test]
    fn test_development_ignores_frontend_url() {
        let cors = CorsConfig::for_environment(
            &env("development"),
            Some("https://leads.example.com".to_string()),
        );

        assert_eq!(cors.allowed_origins, LOCAL_DEV_ORIGINS.to_vec());
        assert!(!cors.is_wildcard());
    }

    #[test]
    fn test_production_uses_frontend_url() {
        let cors = CorsConfig::for_environment(
            &env("production"),
            Some("https://leads.example.com".to_string()),
        );

        assert_eq!(cors.allowed_origins, vec!["https://leads.example.com"]);
    }

    #[test]
    fn test_production_without_frontend_url_is_wildcard() {
        let cors = CorsConfig::for_environment(&env("production"), None);
        assert!(cors.is_wildcard());
    }
}
