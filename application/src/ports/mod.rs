//! Port definitions (interfaces for external adapters)

pub mod invocation_logger;
pub mod page_extractor;
pub mod process_runner;
pub mod scrape_gateway;
pub mod tool_executor;
pub mod tool_schema;
