//! Client configuration
//!
//! API base URL and polling interval for the sync engine.

use std::time::Duration;

/// Default API base URL (local development backend)
const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Default interval between message polls
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        let base_url = std::env::var("MEDICONNECT_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            base_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at the given API base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll interval (default 3 seconds)
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Interval between message polls while a conversation is active
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url() {
        let config = Config::with_base_url("http://example.com/api");
        assert_eq!(config.base_url(), "http://example.com/api");
        assert_eq!(config.poll_interval(), Duration::from_secs(3));
    }

    #[test]
    fn test_api_url() {
        let config = Config::with_base_url("http://localhost:5001/api");
        let url = config.api_url("/conversations/start");
        assert_eq!(url, "http://localhost:5001/api/conversations/start");
    }

    #[test]
    fn test_api_url_trailing_slash() {
        let config = Config::with_base_url("http://localhost:5001/api/");
        let url = config.api_url("/get-static-users");
        assert_eq!(url, "http://localhost:5001/api/get-static-users");
    }

    #[test]
    fn test_with_poll_interval() {
        let config = Config::with_base_url("http://localhost:5001/api")
            .with_poll_interval(Duration::from_millis(500));
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
    }
}
