//! Server configuration.
//!
//! Settings are resolved in three layers:
//!
//! 1. Built-in defaults (`0.0.0.0:3000`, ephemeris data in `ephe/`).
//! 2. An optional TOML file, taken from `SUNPOS_CONFIG` or found as
//!    `sunpos.toml` / `backend/sunpos.toml`.
//! 3. Environment variable overrides: `HOST`, `PORT`, `EPHEMERIS_PATH`,
//!    `COMPUTATION_TIMEOUT_MS`.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! computation_timeout_ms = 5000
//!
//! [ephemeris]
//! data_path = "/srv/ephe"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::EphemerisConfig;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "SUNPOS_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ephemeris: EphemerisSettings,
}

/// Listener and request handling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for a single ephemeris computation.
    #[serde(default = "default_computation_timeout_ms")]
    pub computation_timeout_ms: u64,
}

/// Ephemeris backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_computation_timeout_ms() -> u64 {
    5000
}

fn default_data_path() -> PathBuf {
    PathBuf::from("ephe")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            computation_timeout_ms: default_computation_timeout_ms(),
        }
    }
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve the full configuration from file and process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match Self::default_file() {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    fn default_file() -> Option<PathBuf> {
        ["sunpos.toml", "backend/sunpos.toml"]
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Apply variable overrides from `lookup` (normally the process environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var: "PORT", value: port })?;
        }
        if let Some(timeout) = lookup("COMPUTATION_TIMEOUT_MS") {
            self.server.computation_timeout_ms = timeout.trim().parse().map_err(|_| {
                ConfigError::InvalidValue {
                    var: "COMPUTATION_TIMEOUT_MS",
                    value: timeout,
                }
            })?;
        }
        if let Some(path) = lookup("EPHEMERIS_PATH") {
            self.ephemeris.data_path = PathBuf::from(path);
        }
        Ok(self)
    }

    /// `host:port` string suitable for parsing into a socket address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn computation_timeout(&self) -> Duration {
        Duration::from_millis(self.server.computation_timeout_ms)
    }

    pub fn ephemeris_config(&self) -> EphemerisConfig {
        EphemerisConfig::new(self.ephemeris.data_path.clone())
    }
}
