//! Service configuration.
//!
//! Controls how game URLs handed back to callers are built:
//! `http://{host}:{port}{base_path}/{id}`.
//!
//! ## Environment
//!
//! - `KALAH_HOST`: host name or address (default `127.0.0.1`)
//! - `KALAH_PORT`: TCP port (default `8080`)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::game::GameId;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BASE_PATH: &str = "/games";

pub const HOST_ENV: &str = "KALAH_HOST";
pub const PORT_ENV: &str = "KALAH_PORT";

/// Invalid configuration value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where the game API is reachable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix for game resources, leading slash, no trailing slash.
    pub base_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `KALAH_HOST` / `KALAH_PORT`, defaulting whatever is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` uses the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup(PORT_ENV) {
            config.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: PORT_ENV,
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }

    /// Set the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the resource path prefix. A missing leading slash is added and
    /// trailing slashes are dropped.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let trimmed = base_path.into().trim_end_matches('/').to_string();
        self.base_path = if trimmed.starts_with('/') || trimmed.is_empty() {
            trimmed
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    /// Public URL of a game resource.
    #[must_use]
    pub fn game_url(&self, id: &GameId) -> String {
        format!("http://{}:{}{}/{}", self.host, self.port, self.base_path, id)
    }
}
