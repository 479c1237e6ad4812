//! scrape_url tool: fetch a page through ScrapingBee and return its text

use harvest_application::use_cases::scrape_url::ScrapeUrlUseCase;
use harvest_domain::scrape::{ScrapeFailure, ScrapeRequest};
use harvest_domain::tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};

/// Tool name constant
pub const SCRAPE_URL: &str = "scrape_url";

/// Get the tool definition for scrape_url
pub fn scrape_url_definition() -> ToolDefinition {
    ToolDefinition::new(
        SCRAPE_URL,
        "Scrape a web page through the ScrapingBee API and return its readable text, \
         prefixed with the page title and source URL.",
        RiskLevel::Low,
    )
    .with_parameter(ToolParameter::new("url", "The URL to scrape", true).with_type("string"))
    .with_parameter(
        ToolParameter::new(
            "render_js",
            "Render JavaScript before extracting text (default: true; disable for static pages)",
            false,
        )
        .with_type("boolean"),
    )
}

/// Execute the scrape_url tool
pub async fn execute_scrape_url(use_case: &ScrapeUrlUseCase, call: &ToolCall) -> ToolResult {
    let request = match ScrapeRequest::from_tool_call(call) {
        Ok(r) => r,
        Err(e) => return ToolResult::failure(SCRAPE_URL, ToolError::invalid_argument(e.to_string())),
    };

    match use_case.run(&request).await {
        Ok(text) => {
            let metadata = ToolResultMetadata {
                bytes: Some(text.len()),
                ..Default::default()
            };
            ToolResult::success(SCRAPE_URL, text).with_metadata(metadata)
        }
        Err(failure) => ToolResult::failure(SCRAPE_URL, failure_to_error(&failure)),
    }
}

fn failure_to_error(failure: &ScrapeFailure) -> ToolError {
    if failure.is_timeout() {
        ToolError::timeout(failure.to_string())
    } else {
        ToolError::execution_failed(failure.to_string())
    }
}
