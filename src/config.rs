//! Application configuration
//!
//! Loaded from a TOML file, by default
//! `<config dir>/toystore-customer/config.toml`. Every key is optional:
//!
//! ```toml
//! [server]
//! api_host = "0.0.0.0"
//! api_port = 8080
//! shutdown_timeout = 30
//!
//! [database]
//! url = "sqlite://./customers.db?mode=rwc"
//! max_connections = 10
//! connect_timeout_secs = 8
//!
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::DatabaseConfig;
use crate::shared::errors::InfraError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    /// Seconds to wait for in-flight work on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, InfraError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| InfraError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), InfraError> {
        if self.database.url.trim().is_empty() {
            return Err(InfraError::Config("database.url must not be empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(InfraError::Config(
                "database.max_connections must be at least 1".into(),
            ));
        }
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(InfraError::Config(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }
}

/// `<config dir>/toystore-customer/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("toystore-customer"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.toml")
}
