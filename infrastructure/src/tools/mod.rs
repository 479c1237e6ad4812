//! Tool implementations for the agent runtime
//!
//! - [`repository`]: `clone_repo` (always available)
//! - `web`: `scrape_url` (`web-tools` feature)
//!
//! [`LocalToolExecutor`] dispatches [`ToolCall`](harvest_domain::ToolCall)s to them;
//! [`JsonSchemaToolConverter`] describes them to an agent runtime.

pub mod repository;
#[cfg(feature = "web-tools")]
pub mod web;

mod executor;
mod schema;

pub use executor::LocalToolExecutor;
pub use schema::JsonSchemaToolConverter;

use harvest_domain::tool::entities::ToolSpec;

/// Names models commonly use for `clone_repo`
pub const CLONE_REPO_ALIASES: [&str; 2] = ["git_clone", "clone"];

/// Names models commonly use for `scrape_url`
pub const SCRAPE_URL_ALIASES: [&str; 2] = ["scrape", "fetch_page"];

/// Tool specification with only `clone_repo`
pub fn repository_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(repository::clone_repo_definition())
        .register_aliases(
            CLONE_REPO_ALIASES
                .iter()
                .map(|alias| (*alias, repository::CLONE_REPO)),
        )
}

/// Create the default tool specification with all available tools
pub fn default_tool_spec() -> ToolSpec {
    let spec = repository_tool_spec();

    #[cfg(feature = "web-tools")]
    let spec = with_web_tools(spec);

    spec
}

/// Register `scrape_url` and its aliases
#[cfg(feature = "web-tools")]
pub fn with_web_tools(spec: ToolSpec) -> ToolSpec {
    spec.register(web::scrape_url_definition())
        .register_aliases(SCRAPE_URL_ALIASES.iter().map(|alias| (*alias, web::SCRAPE_URL)))
}
