//! Scrape URL use case.
//!
//! Fetches a page through the scraping service and reduces it to readable
//! text. The outcome is always a string: either the formatted page or one of
//! the fixed [`ScrapeFailure`] messages.

use crate::config::ScrapeConfig;
use crate::ports::page_extractor::PageExtractorPort;
use crate::ports::scrape_gateway::{ScrapeGatewayError, ScrapeGatewayPort};
use harvest_domain::scrape::{ScrapeFailure, ScrapeRequest, format_page, is_textual_content_type};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for `scrape_url`.
///
/// 1. Check the API key (no request is made without one)
/// 2. GET the scraping endpoint with the request's query parameters
/// 3. Reject non-2xx statuses and non-textual content types
/// 4. Extract title and visible text, truncate, prepend the header
pub struct ScrapeUrlUseCase {
    gateway: Arc<dyn ScrapeGatewayPort>,
    extractor: Arc<dyn PageExtractorPort>,
    config: ScrapeConfig,
}

impl Clone for ScrapeUrlUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            extractor: self.extractor.clone(),
            config: self.config.clone(),
        }
    }
}

impl ScrapeUrlUseCase {
    pub fn new(
        gateway: Arc<dyn ScrapeGatewayPort>,
        extractor: Arc<dyn PageExtractorPort>,
        config: ScrapeConfig,
    ) -> Self {
        Self {
            gateway,
            extractor,
            config,
        }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Scrape and return the page text or the failure message
    pub async fn execute(&self, request: &ScrapeRequest) -> String {
        match self.run(request).await {
            Ok(text) => text,
            Err(failure) => failure.to_string(),
        }
    }

    /// Scrape, keeping the failure kind
    pub async fn run(&self, request: &ScrapeRequest) -> Result<String, ScrapeFailure> {
        let api_key = self.config.api_key().ok_or(ScrapeFailure::MissingApiKey)?;

        info!(url = %request.url, render_js = request.render_js, "Scraping page");
        let params = request.query_params(api_key);

        let response = self
            .gateway
            .fetch(&params)
            .await
            .map_err(|e| self.transport_failure(e))?;

        if !response.is_success() {
            warn!(status = response.status, "Scraping service returned an error");
            return Err(ScrapeFailure::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        let content_type = response.content_type.as_deref().unwrap_or("");
        if !is_textual_content_type(content_type) {
            debug!(content_type, "Refusing non-textual response");
            return Err(ScrapeFailure::BinaryContent);
        }

        let page = self.extractor.extract(&response.body);
        let output = format_page(&request.url, &page, self.config.max_chars);
        info!(
            url = %request.url,
            chars = output.chars().count(),
            "Scrape finished"
        );
        Ok(output)
    }

    fn transport_failure(&self, error: ScrapeGatewayError) -> ScrapeFailure {
        warn!("Scrape request failed: {}", error);
        match error {
            ScrapeGatewayError::Timeout => ScrapeFailure::Timeout(self.config.client_timeout_secs),
            ScrapeGatewayError::Connect(e) => ScrapeFailure::Connection(e),
            ScrapeGatewayError::Other(e) => ScrapeFailure::Unexpected(e),
        }
    }
}
