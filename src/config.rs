//! # Configuration
//!
//! Layered application settings.
//!
//! Sources, later ones winning:
//!
//! 1. built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/{RUN_MODE}.toml` (optional, `RUN_MODE` defaults to `development`)
//! 4. `config/local.toml` (optional, not checked in)
//! 5. environment variables prefixed `CARRIER_SELECT__`, nested with `__`,
//!    e.g. `CARRIER_SELECT__DATABASE__URL`
//!
//! A `.env` file in the working directory is loaded into the environment
//! first.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::RankingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "CARRIER_SELECT";

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Maximum pool size.
    pub max_connections: u32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection.
    pub database: DatabaseConfig,
    /// Ranking limits.
    pub ranking: RankingConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads settings from `.env`, the config directory and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source is malformed or
    /// the merged settings are invalid.
    pub fn load() -> ApplicationResult<Self> {
        dotenvy::dotenv().ok();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_with(&run_mode, None)
    }

    /// Loads settings for `run_mode`, reading environment overrides from
    /// `env_vars` instead of the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source is malformed or
    /// the merged settings are invalid.
    pub fn load_with(
        run_mode: &str,
        env_vars: Option<HashMap<String, String>>,
    ) -> ApplicationResult<Self> {
        let defaults = RankingConfig::default();

        let settings = Config::builder()
            .set_default("database.url", "postgres://localhost/carrier_select")
            .and_then(|b| b.set_default("database.max_connections", 5))
            .and_then(|b| b.set_default("ranking.default_limit", defaults.default_limit as u64))
            .and_then(|b| b.set_default("ranking.comparison_limit", defaults.comparison_limit as u64))
            .and_then(|b| b.set_default("logging.level", "info"))
            .and_then(|b| b.set_default("logging.json", false))
            .map_err(config_error)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env_vars),
            )
            .build()
            .map_err(config_error)?;

        let config: Self = settings.try_deserialize().map_err(config_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the merged settings.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first invalid key.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.database.url.trim().is_empty() {
            return Err(ApplicationError::configuration("database.url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(ApplicationError::configuration(
                "database.max_connections must be positive",
            ));
        }
        if self.ranking.default_limit == 0 {
            return Err(ApplicationError::configuration(
                "ranking.default_limit must be positive",
            ));
        }
        if self.ranking.comparison_limit == 0 {
            return Err(ApplicationError::configuration(
                "ranking.comparison_limit must be positive",
            ));
        }
        Ok(())
    }
}

fn config_error(err: config::ConfigError) -> ApplicationError {
    ApplicationError::configuration(err.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_apply_without_sources() {
        let config = AppConfig::load_with("test-no-such-mode", env(&[])).unwrap();

        assert_eq!(config.ranking.default_limit, 5);
        assert_eq!(config.ranking.comparison_limit, 100);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::load_with(
            "test-no-such-mode",
            env(&[
                ("CARRIER_SELECT__DATABASE__URL", "postgres://db/rates"),
                ("CARRIER_SELECT__RANKING__DEFAULT_LIMIT", "3"),
                ("CARRIER_SELECT__LOGGING__JSON", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(config.database.url, "postgres://db/rates");
        assert_eq!(config.ranking.default_limit, 3);
        assert!(config.logging.json);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = AppConfig::load_with(
            "test-no-such-mode",
            env(&[("CARRIER_SELECT__RANKING__COMPARISON_LIMIT", "0")]),
        )
        .unwrap_err();

        assert!(err.is_configuration());
        assert!(err.to_string().contains("comparison_limit"));
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let mut config = AppConfig::load_with("test-no-such-mode", env(&[])).unwrap();
        config.database.url = "  ".to_string();
        assert!(config.validate().unwrap_err().is_configuration());
    }
}
