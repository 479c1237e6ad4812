//! Console output formatter for tool results

use colored::Colorize;
use harvest_domain::{CloneResult, DestinationOwnership, OutputFormat, ScrapeFailure, ToolResult};
use serde_json::Value;

/// Formats tool results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a clone result
    pub fn format_clone(result: &CloneResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(result),
            OutputFormat::Text if result.success => {
                let mut output = format!("{} {}", "✓".green().bold(), result.message);
                if result.ownership == Some(DestinationOwnership::TransferredTempDir) {
                    output.push_str(&format!(
                        "\n{}",
                        "  (temporary directory; remove it when you are done)".dimmed()
                    ));
                }
                output
            }
            OutputFormat::Text => format!("{} {}", "✗".red().bold(), result.message.red()),
        }
    }

    /// Format the outcome of a scrape. Page text is printed untouched.
    pub fn format_scrape(url: &str, outcome: &Result<String, ScrapeFailure>, format: OutputFormat) -> String {
        match (format, outcome) {
            (OutputFormat::Text, Ok(text)) => text.clone(),
            (OutputFormat::Text, Err(failure)) => failure.to_string().red().to_string(),
            (OutputFormat::Json, Ok(text)) => Self::json(&serde_json::json!({
                "success": true,
                "url": url,
                "content": text,
            })),
            (OutputFormat::Json, Err(failure)) => Self::json(&serde_json::json!({
                "success": false,
                "url": url,
                "error": failure.to_string(),
            })),
        }
    }

    /// Format a raw tool result
    pub fn format_tool_result(result: &ToolResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::json(result),
            OutputFormat::Text => match result.error() {
                None => result.text().to_string(),
                Some(error) => format!(
                    "{} {}",
                    format!("[{}]", error.code).red().bold(),
                    error.message
                ),
            },
        }
    }

    /// Format tool schemas: JSON as-is, or a short listing
    pub fn format_tools(schemas: &[Value], format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::json(&schemas);
        }

        let mut output = String::new();
        for schema in schemas {
            output.push_str(&format!(
                "{}\n  {}\n",
                schema["name"].as_str().unwrap_or("?").cyan().bold(),
                schema["description"].as_str().unwrap_or("")
            ));

            let required: Vec<&str> = schema["input_schema"]["required"]
                .as_array()
                .map(|r| r.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            if let Some(properties) = schema["input_schema"]["properties"].as_object() {
                for (name, prop) in properties {
                    let marker = if required.contains(&name.as_str()) { "*" } else { " " };
                    output.push_str(&format!(
                        "    {}{:<14} {:<8} {}\n",
                        marker,
                        name,
                        prop["type"].as_str().unwrap_or(""),
                        prop["description"].as_str().unwrap_or("").dimmed()
                    ));
                }
            }
            output.push('\n');
        }
        output.trim_end().to_string()
    }

    fn json<T: serde::Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_domain::ToolError;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_clone_text() {
        plain();
        let ok = CloneResult::cloned("/tmp/h/repo", DestinationOwnership::TransferredTempDir);
        let text = ConsoleFormatter::format_clone(&ok, OutputFormat::Text);
        assert!(text.starts_with("✓ Repository cloned to /tmp/h/repo"));
        assert!(text.contains("temporary directory"));

        let caller = CloneResult::cloned("/src/repo", DestinationOwnership::CallerDirectory);
        assert!(!ConsoleFormatter::format_clone(&caller, OutputFormat::Text).contains('\n'));

        let failed = CloneResult::git_missing("git");
        assert_eq!(
            ConsoleFormatter::format_clone(&failed, OutputFormat::Text),
            "✗ `git` executable not found in PATH."
        );
    }

    #[test]
    fn test_clone_json() {
        let failed = CloneResult::clone_failed("fatal: not found");
        let json: Value =
            serde_json::from_str(&ConsoleFormatter::format_clone(&failed, OutputFormat::Json))
                .unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "git clone failed: fatal: not found");
        assert!(json.get("cloned_path").is_none());
    }

    #[test]
    fn test_scrape_text_is_untouched() {
        plain();
        let text = "# Title\n\nSource: https://example.com\n\nbody".to_string();
        assert_eq!(
            ConsoleFormatter::format_scrape("https://example.com", &Ok(text.clone()), OutputFormat::Text),
            text
        );
        assert_eq!(
            ConsoleFormatter::format_scrape(
                "https://example.com",
                &Err(ScrapeFailure::MissingApiKey),
                OutputFormat::Text
            ),
            "Error: SCRAPINGBEE_API_KEY environment variable must be set"
        );
    }

    #[test]
    fn test_scrape_json() {
        let json: Value = serde_json::from_str(&ConsoleFormatter::format_scrape(
            "https://example.com",
            &Err(ScrapeFailure::BinaryContent),
            OutputFormat::Json,
        ))
        .unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Error: Cannot process binary response from URL");
    }

    #[test]
    fn test_tool_result_text() {
        plain();
        let ok = ToolResult::success("scrape_url", "page text");
        assert_eq!(ConsoleFormatter::format_tool_result(&ok, OutputFormat::Text), "page text");

        let failed = ToolResult::failure("clone_repo", ToolError::invalid_argument("bad depth"));
        assert_eq!(
            ConsoleFormatter::format_tool_result(&failed, OutputFormat::Text),
            "[INVALID_ARGUMENT] bad depth"
        );
    }

    #[test]
    fn test_tools_listing() {
        plain();
        let schemas = vec![serde_json::json!({
            "name": "scrape_url",
            "description": "Scrape a page",
            "input_schema": {
                "type": "object",
                "properties": {
                    "url": {"type": "string", "description": "The URL"},
                },
                "required": ["url"],
            }
        })];

        let text = ConsoleFormatter::format_tools(&schemas, OutputFormat::Text);
        assert!(text.starts_with("scrape_url\n  Scrape a page"));
        assert!(text.contains("*url"));

        let json: Value =
            serde_json::from_str(&ConsoleFormatter::format_tools(&schemas, OutputFormat::Json))
                .unwrap();
        assert_eq!(json[0]["name"], "scrape_url");
    }
}
