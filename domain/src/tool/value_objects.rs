//! Tool domain value objects: immutable result and error types
//!
//! Every tool invocation produces a [`ToolResult`]. A tool that ran to
//! completion but reported a failure of its own (git exited non-zero, the
//! scraping API rejected the request) is still a failed `ToolResult` with an
//! `EXECUTION_FAILED` error carrying the tool's own message.

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing/wrong parameters |
/// | `NOT_FOUND` | Unknown tool |
/// | `EXECUTION_FAILED` | The tool ran and reported a failure |
/// | `TIMEOUT` | The upstream call timed out |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Resource not found: {}", resource.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new("TIMEOUT", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying output or error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution.
///
/// | Tool | `duration_ms` | `bytes` | `path` | `exit_code` |
/// |------|:---:|:---:|:---:|:---:|
/// | `clone_repo` | yes | - | yes | yes |
/// | `scrape_url` | yes | yes | - | - |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Number of bytes returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// For clones: the cloned path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// For process execution: exit code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Attach output to a result; a failure keeps its error
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_metadata(mut self, metadata: ToolResultMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Text to relay to the end user: the output, or the error message
    pub fn text(&self) -> &str {
        match (&self.output, &self.error) {
            (Some(output), _) => output,
            (None, Some(error)) => &error.message,
            (None, None) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::invalid_argument("Missing required argument: url");
        assert_eq!(err.code, "INVALID_ARGUMENT");
        assert_eq!(
            err.to_string(),
            "[INVALID_ARGUMENT] Missing required argument: url"
        );
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("clone_repo", "Repository cloned to /tmp/x").with_metadata(
            ToolResultMetadata {
                path: Some("/tmp/x".to_string()),
                exit_code: Some(0),
                ..Default::default()
            },
        );

        assert!(result.is_success());
        assert_eq!(result.text(), "Repository cloned to /tmp/x");
        assert!(result.error().is_none());
        assert_eq!(result.metadata.path.as_deref(), Some("/tmp/x"));
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure(
            "scrape_url",
            ToolError::timeout("Error: Request to ScrapingBee timed out after 20 seconds"),
        )
        .with_duration(20_000);

        assert!(!result.is_success());
        assert!(result.output().is_none());
        assert_eq!(result.error().unwrap().code, "TIMEOUT");
        assert!(result.text().contains("timed out"));
        assert_eq!(result.metadata.duration_ms, Some(20_000));
    }

    #[test]
    fn test_tool_result_serialization_skips_empty_fields() {
        let json = serde_json::to_value(ToolResult::success("scrape_url", "text")).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
        assert!(json["metadata"].get("path").is_none());
    }
}
