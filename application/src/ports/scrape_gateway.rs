//! Scrape gateway port
//!
//! One HTTP GET against the scraping service. Transport failures are split
//! into timeout / connection / other so the use case can report each with
//! its own message.

use async_trait::async_trait;
use thiserror::Error;

/// Raw response from the scraping service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    /// `Content-Type` header, if present
    pub content_type: Option<String>,
    pub body: String,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeGatewayError {
    /// The client-side timeout elapsed
    #[error("request timed out")]
    Timeout,

    /// The request could not be sent (DNS, TLS, refused connection...)
    #[error("{0}")]
    Connect(String),

    /// Anything else, e.g. the body could not be decoded
    #[error("{0}")]
    Other(String),
}

/// Port for the scraping HTTP API
#[async_trait]
pub trait ScrapeGatewayPort: Send + Sync {
    /// Issue a GET with the given query parameters
    async fn fetch(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<GatewayResponse, ScrapeGatewayError>;
}
