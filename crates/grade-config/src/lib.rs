//! # grade-config
//!
//! Layered configuration loading for the grade store using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRADES_*` prefix, `__` as separator)
//! 2. Project-level `.grades/config.toml`
//! 3. User-level `~/.config/grades/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GRADES_DATABASE__PATH` -> `database.path`,
//! `GRADES_STATS__THRESHOLD` -> `stats.threshold`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use grade_config::GradesConfig;
//!
//! let config = GradesConfig::load_with_dotenv().expect("config");
//!
//! if config.database.is_remote() {
//!     println!("Remote database: {}", config.database.url);
//! }
//! ```

mod database;
mod error;
mod stats;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use stats::StatsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRADES_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GradesConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl GradesConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".grades/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.stats.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("grades").join("config.toml"))
    }
}
