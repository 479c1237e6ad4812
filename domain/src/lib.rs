//! Domain layer for harvest
//!
//! This crate contains the pure model of the two agent tools harvest exposes.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! - [`tool`]: tool definitions, calls, results and argument validation
//! - [`repository`]: `clone_repo`: request/result types, credential record, git arguments
//! - [`scrape`]: `scrape_url`: request/query, failure messages, page text shaping

pub mod config;
pub mod core;
pub mod repository;
pub mod scrape;
pub mod tool;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use repository::{CloneRequest, CloneResult, CredentialRecord, DestinationOwnership};
pub use scrape::{ExtractedPage, ScrapeFailure, ScrapeRequest};
pub use tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
