use std::fmt;

/// Deployment environment resolved from `NODE_ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment(String);

impl Environment {
    pub const PRODUCTION: &'static str = "production";
    pub const DEVELOPMENT: &'static str = "development";

    /// Resolve the environment, defaulting to `development` when unset
    pub fn from_node_env(value: Option<String>) -> Self {
        match value {
            Some(name) if !name.is_empty() => Self(name),
            _ => Self(Self::DEVELOPMENT.to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.0 == Self::PRODUCTION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the process hosts the application. Chosen once, before any handler
/// is registered, and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupMode {
    /// The hosting platform owns the socket and invokes the app as a function
    Serverless,
    /// Bind our own TCP listener
    Listen,
}

impl StartupMode {
    /// Any non-empty `VERCEL` value selects serverless mode
    pub fn from_flag(flag: Option<String>) -> Self {
        match flag {
            Some(value) if !value.is_empty() => StartupMode::Serverless,
            _ => StartupMode::Listen,
        }
    }
}
