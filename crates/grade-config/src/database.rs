//! Storage connection configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default local database file.
fn default_path() -> String {
    "grades.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local libSQL database file, or `":memory:"`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://grades-org.turso.io`).
    /// When set together with `auth_token`, the remote database is used
    /// instead of `path`.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check if the remote connection has the minimum required fields.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a URL without a token or an
    /// empty local path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.is_empty() && self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".into(),
                reason: "required when database.url is set".into(),
            });
        }
        if self.url.is_empty() && self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
