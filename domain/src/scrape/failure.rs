//! Scrape failure messages
//!
//! `scrape_url` never raises; every failure becomes one of these fixed,
//! human-readable strings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeFailure {
    /// The API key (`SCRAPINGBEE_API_KEY`) is not configured
    #[error("Error: SCRAPINGBEE_API_KEY environment variable must be set")]
    MissingApiKey,

    #[error("Error: ScrapingBee API failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Error: Cannot process binary response from URL")]
    BinaryContent,

    #[error("Error: Request to ScrapingBee timed out after {0} seconds")]
    Timeout(u64),

    #[error("Error: Failed to connect to ScrapingBee API: {0}")]
    Connection(String),

    #[error("Error: {0}")]
    Unexpected(String),
}

impl ScrapeFailure {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScrapeFailure::Timeout(_))
    }
}

/// Whether a response content type can be reduced to text
/// (`text/*`, or anything mentioning json)
pub fn is_textual_content_type(content_type: &str) -> bool {
    content_type.starts_with("text") || content_type.contains("json")
}
