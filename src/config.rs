//! Client configuration parsed from environment variables.

use std::time::Duration;

use protocol::wire::{DEFAULT_BASE_URL, normalize_base_url};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Timeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `SYMBOLPAD_API_URL`: service base URL, default `http://localhost:5000`
    /// - `SYMBOLPAD_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SYMBOLPAD_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// Unparseable timeouts fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("SYMBOLPAD_API_URL").map_or_else(|_| DEFAULT_BASE_URL.to_owned(), |raw| normalize_base_url(&raw));
        let timeouts = Timeouts {
            request_secs: env_parse_u64("SYMBOLPAD_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("SYMBOLPAD_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Self { base_url, timeouts }
    }

    /// Replace the base URL, e.g. from a command-line flag.
    #[must_use]
    pub fn with_base_url(mut self, raw: &str) -> Self {
        self.base_url = normalize_base_url(raw);
        self
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
