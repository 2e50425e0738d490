//! Process configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Read once at startup (after `dotenvy` has loaded `.env`) and passed into
//! client constructors. Missing credentials are not a startup error: the
//! remote call fails later and the affected scenes are dropped.

use crate::image::config::ImageConfig;
use crate::llm::config::LlmConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read `PORT` (default 3000).
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

/// Everything the binary needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub image: ImageConfig,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a strictly-typed variable (currently only `PORT`)
    /// is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self { server: ServerConfig::from_env()?, llm: LlmConfig::from_env(), image: ImageConfig::from_env() })
    }
}

pub(crate) fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env_parse_opt(key).unwrap_or(default)
}

pub(crate) fn env_parse_opt<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env_string(key).and_then(|v| v.parse::<T>().ok())
}


#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
