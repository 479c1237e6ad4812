//! ScrapingBee gateway: the `reqwest` adapter for [`ScrapeGatewayPort`].

use async_trait::async_trait;
use harvest_application::config::ScrapeConfig;
use harvest_application::ports::scrape_gateway::{
    GatewayResponse, ScrapeGatewayError, ScrapeGatewayPort,
};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// HTTP client for the ScrapingBee API.
///
/// One shared [`reqwest::Client`] with the configured overall timeout.
#[derive(Debug, Clone)]
pub struct ScrapingBeeGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl ScrapingBeeGateway {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeGatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.client_timeout())
            .build()
            .map_err(|e| ScrapeGatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Map a transport error. The URL is stripped first: its query string
/// carries the API key.
fn transport_error(error: reqwest::Error) -> ScrapeGatewayError {
    let error = error.without_url();
    if error.is_timeout() {
        ScrapeGatewayError::Timeout
    } else if error.is_decode() {
        ScrapeGatewayError::Other(error.to_string())
    } else {
        ScrapeGatewayError::Connect(error.to_string())
    }
}

#[async_trait]
impl ScrapeGatewayPort for ScrapingBeeGateway {
    async fn fetch(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<GatewayResponse, ScrapeGatewayError> {
        debug!(endpoint = %self.endpoint, "Requesting scrape");

        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(transport_error)?;

        debug!(status, content_type = ?content_type, bytes = body.len(), "Scrape response");
        Ok(GatewayResponse {
            status,
            content_type,
            body,
        })
    }
}
