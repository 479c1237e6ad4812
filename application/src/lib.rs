//! Application layer for harvest
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CloneConfig, ScrapeConfig};
pub use ports::{
    invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger},
    page_extractor::PageExtractorPort,
    process_runner::{ProcessCommand, ProcessError, ProcessOutput, ProcessRunnerPort},
    scrape_gateway::{GatewayResponse, ScrapeGatewayError, ScrapeGatewayPort},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::clone_repo::{CloneRepoOutput, CloneRepoUseCase};
pub use use_cases::scrape_url::ScrapeUrlUseCase;
