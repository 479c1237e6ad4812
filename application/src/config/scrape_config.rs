//! Scrape parameters: how `scrape_url` talks to the scraping service.

use harvest_domain::scrape::MAX_PAGE_CHARS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// ScrapingBee endpoint
pub const DEFAULT_SCRAPE_ENDPOINT: &str = "https://app.scrapingbee.com/api/v1/";

/// Client-side timeout for the HTTP call, independent of the upstream `timeout` parameter
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// API key; `scrape_url` refuses to run without one
    pub api_key: Option<String>,
    /// API endpoint
    pub endpoint: String,
    /// Maximum characters of page text returned
    pub max_chars: usize,
    /// Overall timeout of the HTTP call, in seconds
    pub client_timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_SCRAPE_ENDPOINT.to_string(),
            max_chars: MAX_PAGE_CHARS,
            client_timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

impl ScrapeConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The API key, if configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_secs)
    }
}

impl fmt::Debug for ScrapeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrapeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("max_chars", &self.max_chars)
            .field("client_timeout_secs", &self.client_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrapeConfig::default();
        assert_eq!(config.api_key(), None);
        assert_eq!(config.endpoint, "https://app.scrapingbee.com/api/v1/");
        assert_eq!(config.max_chars, 25_000);
        assert_eq!(config.client_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        assert_eq!(ScrapeConfig::default().with_api_key("   ").api_key(), None);
        assert_eq!(ScrapeConfig::default().with_api_key("abc").api_key(), Some("abc"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ScrapeConfig::default().with_api_key("very-secret");
        assert!(!format!("{:?}", config).contains("very-secret"));
    }
}
