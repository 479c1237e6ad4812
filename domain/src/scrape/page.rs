//! Shaping extracted page text into tool output

use crate::core::string::{collapse_blank_lines, truncate_chars};

/// Maximum number of characters of page text returned
pub const MAX_PAGE_CHARS: usize = 25_000;

/// Appended when page text was cut at the character limit
pub const TRUNCATION_MARKER: &str = "\n\n... (content truncated)";

/// Title and visible text pulled out of an HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Text of the first `<title>` element, if the document has one
    pub title: Option<String>,
    /// Visible text nodes, one per line
    pub text: String,
}

/// Build the final output: header, then the cleaned text cut at `max_chars`.
///
/// ```text
/// # <title>
///
/// Source: <url>
///
/// <text>
/// ```
///
/// The title line is omitted when the page has no `<title>`.
pub fn format_page(url: &str, page: &ExtractedPage, max_chars: usize) -> String {
    let cleaned = collapse_blank_lines(&page.text);
    let (body, truncated) = truncate_chars(&cleaned, max_chars);

    let mut output = String::with_capacity(body.len() + url.len() + 64);
    if let Some(title) = &page.title {
        output.push_str("# ");
        output.push_str(title.trim());
        output.push_str("\n\n");
    }
    output.push_str("Source: ");
    output.push_str(url);
    output.push_str("\n\n");
    output.push_str(body);
    if truncated {
        output.push_str(TRUNCATION_MARKER);
    }
    output
}
