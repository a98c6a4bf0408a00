// ABOUTME: Environment-driven configuration for the console client
// ABOUTME: Base URL and HTTP timeout settings with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchlens Analytics

use std::env;

/// Environment variable for the backend base URL
pub const ENV_API_BASE_URL: &str = "MATCHLENS_API_BASE_URL";

/// Environment variable for the request timeout in seconds
pub const ENV_HTTP_TIMEOUT_SECS: &str = "MATCHLENS_HTTP_TIMEOUT_SECS";

/// Environment variable for the connection timeout in seconds
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "MATCHLENS_CONNECT_TIMEOUT_SECS";

/// Default backend base URL (local analysis backend)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client configuration resolved from the environment
///
/// Configuration is environment-only: there is no config file. Unset or
/// unparseable values fall back to the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://127.0.0.1:8001`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Resolve configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_API_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout_secs: env_u64(ENV_HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: env_u64(ENV_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Override the base URL, keeping the remaining settings
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    }

    #[test]
    fn with_base_url_replaces_only_the_url() {
        let config = ClientConfig::default().with_base_url("http://analysis.internal:9000");
        assert_eq!(config.base_url, "http://analysis.internal:9000");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
