//! Application-level configuration.
//!
//! Settings are plain values injected into the use cases at construction;
//! nothing here reads the environment.
//!
//! - [`CloneConfig`]: git program, temp directory naming, credential file location
//! - [`ScrapeConfig`]: API key, endpoint, output limit, client timeout

pub mod clone_config;
pub mod scrape_config;

pub use clone_config::CloneConfig;
pub use scrape_config::ScrapeConfig;
