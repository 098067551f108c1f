//! Fetch settings loaded from environment variables.
//!
//! Defaults point at a local development server so the fetcher works with
//! zero configuration.

use std::time::Duration;

/// Default location of the configuration document.
pub const DEFAULT_CONFIG_URL: &str = "http://127.0.0.1:8080/config/chat-config.json";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct RemoteSettings {
    /// Absolute URL of the configuration document.
    /// Env: `DOGECHAT_CONFIG_URL`
    /// Default: `http://127.0.0.1:8080/config/chat-config.json`
    pub config_url: String,

    /// Timeout applied to the whole request.
    /// Env: `DOGECHAT_CONFIG_TIMEOUT_SECS`
    /// Default: `10`
    pub request_timeout: Duration,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            config_url: DEFAULT_CONFIG_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RemoteSettings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        // Validated when the fetcher is built.
        if let Ok(url) = std::env::var("DOGECHAT_CONFIG_URL") {
            settings.config_url = url;
        }

        if let Ok(raw) = std::env::var("DOGECHAT_CONFIG_TIMEOUT_SECS") {
            match parse_timeout_secs(&raw) {
                Some(timeout) => settings.request_timeout = timeout,
                None => {
                    tracing::warn!(
                        value = %raw,
                        "Invalid DOGECHAT_CONFIG_TIMEOUT_SECS, using default"
                    );
                }
            }
        }

        settings
    }
}

/// Whole seconds, strictly positive.
fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}
