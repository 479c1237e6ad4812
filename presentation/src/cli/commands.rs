//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use harvest_domain::{CloneRequest, ScrapeRequest, ToolCall};
use std::path::PathBuf;

/// Output format for tool results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, as an agent would relay it
    Text,
    /// The structured result as JSON
    Json,
}

impl From<OutputFormat> for harvest_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => harvest_domain::OutputFormat::Text,
            OutputFormat::Json => harvest_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for harvest
#[derive(Parser, Debug)]
#[command(name = "harvest")]
#[command(author, version, about = "Agent tools for cloning git repositories and scraping web pages")]
#[command(long_about = r#"
harvest exposes two agent tools on the command line:

  clone_repo   Clone a git repository (branch, shallow depth, destination, token auth)
  scrape_url   Fetch a page through ScrapingBee and return its readable text

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./harvest.toml                  Project-level config
3. ~/.config/harvest/config.toml   Global config

The ScrapingBee API key is read from SCRAPINGBEE_API_KEY (or scrape.api_key).

Example:
  harvest clone https://github.com/rust-lang/log --depth 1
  harvest scrape https://example.com --no-render-js
  harvest call git_clone --args '{"repo_url": "https://github.com/rust-lang/log"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (default: text, or output.format from the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL record of every tool invocation to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clone a git repository (clone_repo)
    Clone(CloneArgs),
    /// Scrape a web page (scrape_url)
    Scrape(ScrapeArgs),
    /// Dispatch a raw tool call, by name or alias
    Call(CallArgs),
    /// Print the JSON schemas of all tools
    Tools,
}

#[derive(Args, Debug)]
pub struct CloneArgs {
    /// URL of the repository
    pub repo_url: String,

    /// Branch or tag to check out
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Shallow clone with this many commits
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub depth: Option<u32>,

    /// Destination directory (default: a new temporary directory)
    #[arg(short, long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Access token for private repositories (visible in the process list)
    #[arg(long)]
    pub token: Option<String>,

    /// Username to pair with the token
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,
}

impl CloneArgs {
    /// Build the request; empty option values count as absent, as they do
    /// for tool calls.
    pub fn to_request(&self) -> CloneRequest {
        let mut request = CloneRequest::new(&self.repo_url);
        request.branch = non_empty(&self.branch);
        request.depth = self.depth;
        request.dest_dir = self.dest.clone();
        request.token = non_empty(&self.token);
        request.username_hint = non_empty(&self.username);
        request
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Page to scrape
    pub url: String,

    /// Skip JavaScript rendering (faster for static pages)
    #[arg(long)]
    pub no_render_js: bool,
}

impl ScrapeArgs {
    pub fn to_request(&self) -> ScrapeRequest {
        ScrapeRequest::new(&self.url).with_render_js(!self.no_render_js)
    }
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name or alias (e.g. clone_repo, git_clone, scrape_url, fetch_page)
    pub tool: String,

    /// Tool arguments as a JSON object
    #[arg(short, long, value_name = "JSON")]
    pub args: Option<String>,
}

impl CallArgs {
    /// Build the tool call; fails when `--args` is not a JSON object
    pub fn to_tool_call(&self) -> Result<ToolCall, String> {
        let arguments = match &self.args {
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| format!("--args is not valid JSON: {}", e))?,
            None => serde_json::Value::Null,
        };
        ToolCall::from_json_arguments(&self.tool, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clone() {
        let cli = Cli::parse_from([
            "harvest", "clone", "https://github.com/a/b.git", "--branch", "dev", "--depth", "1",
            "--dest", "/tmp/b", "--token", "t", "-o", "json",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));

        let Some(Command::Clone(args)) = cli.command else {
            panic!("expected clone");
        };
        let request = args.to_request();
        assert_eq!(request.repo_url, "https://github.com/a/b.git");
        assert_eq!(request.branch.as_deref(), Some("dev"));
        assert_eq!(request.depth, Some(1));
        assert_eq!(request.dest_dir, Some(PathBuf::from("/tmp/b")));
        assert_eq!(request.token.as_deref(), Some("t"));
        assert_eq!(request.username_hint, None);
    }

    #[test]
    fn test_empty_clone_options_are_absent() {
        let cli = Cli::parse_from([
            "harvest", "clone", "https://github.com/a/b.git", "--branch", "", "--token", "",
            "--username", "",
        ]);
        let Some(Command::Clone(args)) = cli.command else {
            panic!("expected clone");
        };
        let request = args.to_request();
        assert_eq!(request.branch, None);
        assert_eq!(request.token, None);
        assert_eq!(request.username_hint, None);

        // clap's path parser refuses an empty destination outright
        let parsed =
            Cli::try_parse_from(["harvest", "clone", "https://github.com/a/b.git", "--dest", ""]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_zero_depth_rejected() {
        let parsed =
            Cli::try_parse_from(["harvest", "clone", "https://github.com/a/b.git", "--depth", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_parse_scrape() {
        let cli = Cli::parse_from(["harvest", "-v", "scrape", "https://example.com", "--no-render-js"]);
        assert_eq!(cli.verbose, 1);
        let Some(Command::Scrape(args)) = cli.command else {
            panic!("expected scrape");
        };
        assert!(!args.to_request().render_js);
    }

    #[test]
    fn test_call_arguments() {
        let args = CallArgs {
            tool: "fetch_page".to_string(),
            args: Some(r#"{"url": "https://example.com", "render_js": false}"#.to_string()),
        };
        let call = args.to_tool_call().unwrap();
        assert_eq!(call.tool_name, "fetch_page");
        assert_eq!(call.get_bool("render_js"), Some(false));

        let bad = CallArgs {
            tool: "scrape_url".to_string(),
            args: Some("[1, 2]".to_string()),
        };
        assert!(bad.to_tool_call().is_err());

        let empty = CallArgs {
            tool: "tools".to_string(),
            args: None,
        };
        assert!(empty.to_tool_call().unwrap().arguments.is_empty());
    }
}
