//! Web scraping domain
//!
//! Pure pieces of the `scrape_url` tool: the request, the query sent to the
//! scraping service, the fixed failure messages, and the shaping of extracted
//! page text into the final tool output.

pub mod failure;
pub mod page;
pub mod request;

pub use failure::{ScrapeFailure, is_textual_content_type};
pub use page::{ExtractedPage, MAX_PAGE_CHARS, TRUNCATION_MARKER, format_page};
pub use request::{ScrapeRequest, SCRAPE_API_KEY_ENV};
