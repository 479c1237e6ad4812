//! Scrape request value object

use crate::core::error::DomainError;
use crate::tool::entities::ToolCall;

/// Environment variable holding the scraping service API key
pub const SCRAPE_API_KEY_ENV: &str = "SCRAPINGBEE_API_KEY";

/// Upstream render budget when JavaScript rendering is requested
const RENDER_JS_TIMEOUT_MS: u32 = 15_000;

/// Upstream budget for static fetches
const STATIC_TIMEOUT_MS: u32 = 8_000;

/// Structured arguments of a `scrape_url` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    /// Page to scrape
    pub url: String,
    /// Execute the page's scripts server-side before capturing HTML
    pub render_js: bool,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            render_js: true,
        }
    }

    pub fn with_render_js(mut self, render_js: bool) -> Self {
        self.render_js = render_js;
        self
    }

    /// Build a request from `scrape_url` tool arguments (`render_js` defaults to true)
    pub fn from_tool_call(call: &ToolCall) -> Result<Self, DomainError> {
        let url = call
            .get_string("url")
            .ok_or_else(|| DomainError::MissingArgument("url".to_string()))?;
        Ok(Self {
            url: url.to_string(),
            render_js: call.get_bool("render_js").unwrap_or(true),
        })
    }

    /// Timeout the scraping service should apply on its side
    pub fn upstream_timeout_ms(&self) -> u32 {
        if self.render_js {
            RENDER_JS_TIMEOUT_MS
        } else {
            STATIC_TIMEOUT_MS
        }
    }

    /// Query parameters for the scraping API.
    ///
    /// Premium proxy routing and ad/resource blocking are always requested.
    pub fn query_params(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", api_key.to_string()),
            ("url", self.url.clone()),
            ("render_js", self.render_js.to_string()),
            ("premium_proxy", "true".to_string()),
            ("block_ads", "true".to_string()),
            ("block_resources", "true".to_string()),
            ("timeout", self.upstream_timeout_ms().to_string()),
        ]
    }
}
