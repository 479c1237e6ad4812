//! Configuration file loading for harvest
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./harvest.toml` or `./.harvest.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/harvest/config.toml`
//! 4. Default values
//!
//! `SCRAPINGBEE_API_KEY` overrides `scrape.api_key` from any file.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCloneConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileScrapeConfig,
};
pub use loader::ConfigLoader;
