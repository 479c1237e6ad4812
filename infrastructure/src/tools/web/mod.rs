//! **Web Tools**: `scrape_url`
//!
//! Gated behind the `web-tools` Cargo feature flag.
//!
//! | Piece | Role | Key Dependency |
//! |-------|------|----------------|
//! | [`ScrapingBeeGateway`] | HTTP GET against the ScrapingBee API | `reqwest` |
//! | [`ScraperPageExtractor`] | HTML → title + visible text | `scraper` |
//! | [`scrape_url_definition`] | Tool definition (low risk, read-only) | |
//!
//! ```toml
//! # infrastructure/Cargo.toml
//! [features]
//! web-tools = ["dep:reqwest", "dep:scraper"]
//!
//! # cli/Cargo.toml (enabled by default for end users)
//! [features]
//! default = ["web-tools"]
//! web-tools = ["harvest-infrastructure/web-tools"]
//! ```
//!
//! Aliases registered in [`default_tool_spec()`](super::default_tool_spec):
//! `scrape`, `fetch_page` → `scrape_url`.

mod extract;
mod gateway;
mod scrape;

pub use extract::ScraperPageExtractor;
pub use gateway::ScrapingBeeGateway;
pub use scrape::{SCRAPE_URL, execute_scrape_url, scrape_url_definition};
