//! Page extractor port
//!
//! Reduces an HTML document to its title and visible text. Kept behind a
//! port so the scrape use case does not depend on an HTML parser.

use harvest_domain::scrape::ExtractedPage;

pub trait PageExtractorPort: Send + Sync {
    /// Extract the `<title>` and the visible text nodes of `html`,
    /// skipping `<script>` and `<style>` content
    fn extract(&self, html: &str) -> ExtractedPage;
}
