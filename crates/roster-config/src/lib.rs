//! # roster-config
//!
//! Layered configuration loading for Roster using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROSTER_*` prefix, `__` as separator)
//! 2. An explicit config file, or `./roster.toml` when none is given
//! 3. User-level `~/.config/roster/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROSTER_SERVER__PORT` -> `server.port`,
//! `ROSTER_DATABASE__PATH` -> `database.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use roster_config::RosterConfig;
//!
//! let config = RosterConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RosterConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with an explicit config file in place of `./roster.toml`.
    ///
    /// A missing explicit file is an error rather than being skipped.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file '{}' does not exist", path.display()),
            });
        }
        Self::from_figment(Self::figment_with(Some(path)))
    }

    /// Load `.env` into the process environment, then load configuration,
    /// from `config_file` when given.
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        config_file.map_or_else(Self::load, Self::load_from)
    }

    /// Build the default figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer providers on top.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the provider chain, optionally replacing the project-local file.
    pub fn figment_with(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = config_file.map_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ROSTER_").split("__"))
    }

    /// Reject values that would only fail later at bind or open time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "port must be non-zero".to_string(),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                reason: "host must not be empty".to_string(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".to_string(),
                reason: "path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roster").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RosterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "roster.db");
        assert_eq!(config.general.environment, "development");
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = RosterConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn empty_database_path_is_rejected() {
        let mut config = RosterConfig::default();
        config.database.path = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "database.path"
        ));
    }
}
