//! Presentation layer for harvest
//!
//! This crate contains the CLI definition and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{CallArgs, Cli, CloneArgs, Command, OutputFormat, ScrapeArgs};
pub use output::console::ConsoleFormatter;
