//! Tool domain module
//!
//! Abstractions for how an agent runtime calls the two harvest tools.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (output)     │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        ├─ aliases: "git_clone" → "clone_repo"
//!        └─ tools:   "clone_repo" → ToolDefinition
//! ```
//!
//! Models sometimes call a tool by a near-miss name. [`ToolSpec::resolve`]
//! maps registered aliases back to the canonical name before dispatch.
//!
//! # Key Types
//!
//! - [`ToolSpec`]: Registry of available tools + alias mappings
//! - [`ToolDefinition`]: Schema for a single tool (name, params, risk level)
//! - [`ToolCall`]: An invocation request with JSON arguments
//! - [`ToolResult`]: Execution outcome with [`ToolResultMetadata`](value_objects::ToolResultMetadata)
//! - [`ToolValidator`]: Pure parameter validation (presence, unknown names, JSON types)

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
