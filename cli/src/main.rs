//! CLI entrypoint for harvest
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser};
use harvest_application::{
    CloneRepoUseCase, InvocationLogger, NoInvocationLogger, ToolExecutorPort, ToolSchemaPort,
};
use harvest_domain::OutputFormat;
use harvest_infrastructure::{
    ConfigLoader, FileConfig, JsonSchemaToolConverter, JsonlInvocationLogger, LocalToolExecutor,
    SystemProcessRunner,
};
use harvest_presentation::{Cli, Command, ConsoleFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "web-tools")]
use harvest_application::ScrapeUrlUseCase;
#[cfg(feature = "web-tools")]
use harvest_infrastructure::{ScraperPageExtractor, ScrapingBeeGateway};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    info!("Starting harvest");

    // === Dependency Injection ===
    let clone_use_case = CloneRepoUseCase::new(
        Arc::new(SystemProcessRunner::new()),
        config.to_clone_config(),
    );

    let success = match command {
        Command::Clone(args) => {
            let request = args.to_request();
            let result = tokio::task::spawn_blocking(move || clone_use_case.execute(&request))
                .await
                .context("Clone task failed")?;
            println!("{}", ConsoleFormatter::format_clone(&result, format));
            result.success
        }
        Command::Scrape(args) => scrape(&config, &args.to_request(), format).await?,
        Command::Call(args) => {
            let call = args.to_tool_call().map_err(|e| anyhow!(e))?;
            let logger = invocation_logger(cli.log_file.as_deref());
            let executor = build_executor(clone_use_case, &config)?.with_logger(logger);
            let result = executor.execute(&call).await;
            println!("{}", ConsoleFormatter::format_tool_result(&result, format));
            result.is_success()
        }
        Command::Tools => {
            let executor = build_executor(clone_use_case, &config)?;
            let schemas = JsonSchemaToolConverter.all_tools_schema(executor.tool_spec());
            println!("{}", ConsoleFormatter::format_tools(&schemas, format));
            true
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// JSONL logger for `--log-file`, or a no-op
fn invocation_logger(path: Option<&std::path::Path>) -> Arc<dyn InvocationLogger> {
    match path.and_then(|p| JsonlInvocationLogger::new(p)) {
        Some(logger) => Arc::new(logger),
        None => {
            if let Some(path) = path {
                warn!("Invocation log disabled: cannot open {}", path.display());
            }
            Arc::new(NoInvocationLogger)
        }
    }
}

#[cfg(feature = "web-tools")]
fn scrape_use_case(config: &FileConfig) -> Result<ScrapeUrlUseCase> {
    let scrape_config = config.to_scrape_config();
    let gateway = ScrapingBeeGateway::new(&scrape_config).map_err(|e| anyhow!(e))?;
    Ok(ScrapeUrlUseCase::new(
        Arc::new(gateway),
        Arc::new(ScraperPageExtractor::new()),
        scrape_config,
    ))
}

#[cfg(feature = "web-tools")]
fn build_executor(clone: CloneRepoUseCase, config: &FileConfig) -> Result<LocalToolExecutor> {
    Ok(LocalToolExecutor::new(clone).with_scrape(scrape_use_case(config)?))
}

#[cfg(not(feature = "web-tools"))]
fn build_executor(clone: CloneRepoUseCase, _config: &FileConfig) -> Result<LocalToolExecutor> {
    Ok(LocalToolExecutor::new(clone))
}

#[cfg(feature = "web-tools")]
async fn scrape(
    config: &FileConfig,
    request: &harvest_domain::ScrapeRequest,
    format: OutputFormat,
) -> Result<bool> {
    let outcome = scrape_use_case(config)?.run(request).await;
    println!(
        "{}",
        ConsoleFormatter::format_scrape(&request.url, &outcome, format)
    );
    Ok(outcome.is_ok())
}

#[cfg(not(feature = "web-tools"))]
async fn scrape(
    _config: &FileConfig,
    _request: &harvest_domain::ScrapeRequest,
    _format: OutputFormat,
) -> Result<bool> {
    anyhow::bail!("harvest was built without the `web-tools` feature; scraping is unavailable")
}
