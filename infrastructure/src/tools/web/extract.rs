//! HTML text extraction with `scraper`.

use harvest_application::ports::page_extractor::PageExtractorPort;
use harvest_domain::scrape::ExtractedPage;
use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose entire subtree is dropped
const SKIP_TAGS: [&str; 2] = ["script", "style"];

/// [`PageExtractorPort`] backed by the `scraper` HTML parser.
///
/// Walks the whole document (head included), keeps every non-blank text node
/// outside `<script>`/`<style>`, one per line.
#[derive(Debug, Clone, Default)]
pub struct ScraperPageExtractor;

impl ScraperPageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractorPort for ScraperPageExtractor {
    fn extract(&self, html: &str) -> ExtractedPage {
        let document = Html::parse_document(html);

        let title = Selector::parse("title")
            .ok()
            .and_then(|selector| document.select(&selector).next())
            .map(|title| title.text().collect::<String>().trim().to_string());

        let text = collect_element_text(document.root_element()).join("\n");

        ExtractedPage { title, text }
    }
}

/// Recursively collect trimmed text nodes, skipping [`SKIP_TAGS`] subtrees
fn collect_element_text(element: ElementRef) -> Vec<String> {
    if SKIP_TAGS.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el));
                }
            }
            _ => {}
        }
    }
    parts
}
