//! Client configuration resolved once at process start.

use std::time::Duration;

/// Connection settings for the backend API.
///
/// Constructed once at startup and passed into the client; the library
/// never reads the environment itself. A missing base URL makes every
/// call fail soft with a configuration error instead of attempting a
/// request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    api_token: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Applied to every request unless overridden with [`with_timeout`].
    ///
    /// [`with_timeout`]: ClientConfig::with_timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// `base_url` is the backend origin, e.g. `https://compliance.example.com`
    /// (a trailing slash is trimmed). `api_token` is sent as a bearer
    /// credential on every request and may be empty.
    pub fn new(base_url: Option<String>, api_token: String) -> Self {
        Self {
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
            api_token,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
