//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `SWEETSHOP_HOST` - Bind address (default: 0.0.0.0)
//! - `SWEETSHOP_PORT` - Listen port (default: 8080)
//! - `SWEETSHOP_SEED_CATALOG` - Load the starter catalog at startup (default: true)
//! - `SWEETSHOP_LOG_FORMAT` - `json` or `pretty` (default: json)
//! - `RUST_LOG` - Log filter, read by the tracing subscriber (default: info)

use std::net::{IpAddr, SocketAddr};

use sweetshop_observability::LogFormat;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Populate the inventory with the starter catalog on boot.
    pub seed_catalog: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            seed_catalog: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// Calls `dotenvy::dotenv()` first so a local `.env` file is honoured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("SWEETSHOP_HOST") {
            Some(v) => parse_var("SWEETSHOP_HOST", &v, |s| s.parse::<IpAddr>())?,
            None => defaults.host,
        };
        let port = match lookup("SWEETSHOP_PORT") {
            Some(v) => parse_var("SWEETSHOP_PORT", &v, |s| s.parse::<u16>())?,
            None => defaults.port,
        };
        let seed_catalog = match lookup("SWEETSHOP_SEED_CATALOG") {
            Some(v) => parse_bool("SWEETSHOP_SEED_CATALOG", &v)?,
            None => defaults.seed_catalog,
        };
        let log_format = match lookup("SWEETSHOP_LOG_FORMAT") {
            Some(v) => parse_var("SWEETSHOP_LOG_FORMAT", &v, |s| s.parse::<LogFormat>())?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            seed_catalog,
            log_format,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, E: std::fmt::Display>(
    key: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, ConfigError> {
    parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
