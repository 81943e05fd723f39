//! Host configuration parsed from environment variables.
//!
//! The embedded [`ApiConfig`] is the one injected into every rendered page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use probes::{ApiConfig, ConfigError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error(transparent)]
    Api(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - everything [`ApiConfig::from_env`] reads (`PROBE_ENV`,
    ///   `PROBE_API_BASE_URL`, `PROBE_DEV_BEARER`, `PROBE_PATH_<ACTION>`)
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let api = ApiConfig::from_lookup(&lookup)?;
        Ok(Self { port, api })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ServerConfigError::InvalidPort(value.to_owned())),
    }
}
