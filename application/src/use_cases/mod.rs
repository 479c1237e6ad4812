//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod clone_repo;
pub mod scrape_url;
