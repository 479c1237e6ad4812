//! Infrastructure layer for harvest
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod process;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCloneConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileScrapeConfig,
};
pub use logging::JsonlInvocationLogger;
pub use process::SystemProcessRunner;
pub use tools::{JsonSchemaToolConverter, LocalToolExecutor, default_tool_spec};
#[cfg(feature = "web-tools")]
pub use tools::web::{ScraperPageExtractor, ScrapingBeeGateway};
