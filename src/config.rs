//! Endpoint configuration baked in from the build environment.
//!
//! A WASM bundle has no process environment at runtime, so the values are
//! read with `option_env!` when the crate is compiled. Missing or blank values
//! fall back to the local development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/chat";
pub const DEFAULT_TITLE_API_URL: &str = "http://127.0.0.1:8000/api/title";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Errors produced while parsing endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The request timeout was not a positive integer of milliseconds.
    #[error("invalid CHAT_REQUEST_TIMEOUT_MS: {0:?}")]
    InvalidTimeout(String),
}

/// Base URLs and limits for the two backend endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Question-answering endpoint (`POST`, `{"question"}` -> `{"answer"}`).
    pub api_url: String,
    /// Title-generation endpoint (`POST`, `{"message"}` -> `{"title"}`).
    pub title_api_url: String,
    /// Upper bound for a single request before it is treated as failed.
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            title_api_url: DEFAULT_TITLE_API_URL.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Build the config from compile-time environment variables.
    ///
    /// Optional:
    /// - `CHAT_API_URL`: default [`DEFAULT_API_URL`]
    /// - `CHAT_TITLE_API_URL`: default [`DEFAULT_TITLE_API_URL`]
    /// - `CHAT_REQUEST_TIMEOUT_MS`: default 30000
    ///
    /// # Errors
    ///
    /// Returns an error if `CHAT_REQUEST_TIMEOUT_MS` is set but is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("CHAT_API_URL"),
            option_env!("CHAT_TITLE_API_URL"),
            option_env!("CHAT_REQUEST_TIMEOUT_MS"),
        )
    }

    /// Build the config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout_ms` is present but is not a positive integer.
    pub fn from_values(
        api_url: Option<&str>,
        title_api_url: Option<&str>,
        timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: url_or_default(api_url, DEFAULT_API_URL),
            title_api_url: url_or_default(title_api_url, DEFAULT_TITLE_API_URL),
            request_timeout_ms: parse_timeout(timeout_ms)?,
        })
    }

    /// Like [`ApiConfig::from_env`], but logs a bad value and falls back to
    /// the defaults instead of failing startup.
    pub fn load() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default endpoint config");
                Self::default()
            }
        }
    }
}

fn url_or_default(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => default.to_owned(),
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_REQUEST_TIMEOUT_MS);
    };
    match raw.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
