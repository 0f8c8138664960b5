//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("AUTH_UPSTREAM_URL must be an http(s) URL, got '{0}'")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the authentication service, without a trailing slash.
    pub auth_upstream_url: Option<String>,
    pub auth_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            auth_upstream_url: None,
            auth_timeout: Duration::from_secs(DEFAULT_AUTH_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 5000
    /// - `AUTH_UPSTREAM_URL`: authentication service base URL; `/login` and
    ///   `/register` answer 503 when absent
    /// - `AUTH_TIMEOUT_SECS`: upstream request timeout, default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or the upstream
    /// URL is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let auth_upstream_url = lookup("AUTH_UPSTREAM_URL")
            .map(|raw| parse_upstream(&raw))
            .transpose()?
            .flatten();
        let timeout_secs = lookup("AUTH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_AUTH_TIMEOUT_SECS);

        Ok(Self { port, auth_upstream_url, auth_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_upstream(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(trimmed.to_owned()));
    }
    Ok(Some(trimmed.trim_end_matches('/').to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
