//! Local tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! ```text
//! ToolExecutorPort::execute(call)
//!   ├─ resolve alias      (git_clone → clone_repo)       NOT_FOUND if unknown
//!   ├─ validate arguments (DefaultToolValidator)         INVALID_ARGUMENT
//!   ├─ log "tool_call"    (sensitive arguments redacted)
//!   ├─ dispatch
//!   │    ├─ clone_repo → CloneRepoUseCase  (blocking pool)
//!   │    └─ scrape_url → ScrapeUrlUseCase  (web-tools feature)
//!   └─ log "tool_result"  (success, code, duration)
//! ```

use super::repository::{self, CLONE_REPO};
use async_trait::async_trait;
use harvest_application::ports::invocation_logger::{
    InvocationEvent, InvocationLogger, NoInvocationLogger,
};
use harvest_application::ports::tool_executor::ToolExecutorPort;
use harvest_application::use_cases::clone_repo::CloneRepoUseCase;
#[cfg(feature = "web-tools")]
use harvest_application::use_cases::scrape_url::ScrapeUrlUseCase;
use harvest_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Executor that runs harvest's tools on the local machine.
///
/// Starts with `clone_repo` only; [`with_scrape()`](Self::with_scrape) adds
/// `scrape_url` when the `web-tools` feature is enabled.
pub struct LocalToolExecutor {
    tool_spec: ToolSpec,
    clone: Arc<CloneRepoUseCase>,
    #[cfg(feature = "web-tools")]
    scrape: Option<ScrapeUrlUseCase>,
    logger: Arc<dyn InvocationLogger>,
}

impl LocalToolExecutor {
    pub fn new(clone: CloneRepoUseCase) -> Self {
        Self {
            tool_spec: super::repository_tool_spec(),
            clone: Arc::new(clone),
            #[cfg(feature = "web-tools")]
            scrape: None,
            logger: Arc::new(NoInvocationLogger),
        }
    }

    /// Register `scrape_url`, backed by the given use case
    #[cfg(feature = "web-tools")]
    pub fn with_scrape(mut self, scrape: ScrapeUrlUseCase) -> Self {
        self.tool_spec = super::with_web_tools(self.tool_spec);
        self.scrape = Some(scrape);
        self
    }

    /// Set the structured invocation logger
    pub fn with_logger(mut self, logger: Arc<dyn InvocationLogger>) -> Self {
        self.logger = logger;
        self
    }

    async fn dispatch(&self, call: &ToolCall) -> ToolResult {
        match call.tool_name.as_str() {
            CLONE_REPO => repository::execute_clone_repo(&self.clone, call).await,
            #[cfg(feature = "web-tools")]
            super::web::SCRAPE_URL => match &self.scrape {
                Some(scrape) => super::web::execute_scrape_url(scrape, call).await,
                None => not_implemented(call),
            },
            _ => not_implemented(call),
        }
    }

    fn log_call(&self, call: &ToolCall) {
        let arguments = self
            .tool_spec
            .get(&call.tool_name)
            .map(|definition| definition.redacted_arguments(call))
            .unwrap_or_default();
        self.logger.log(InvocationEvent::new(
            "tool_call",
            serde_json::json!({
                "tool": call.tool_name,
                "arguments": arguments,
            }),
        ));
    }

    fn log_result(&self, result: &ToolResult) {
        self.logger.log(InvocationEvent::new(
            "tool_result",
            serde_json::json!({
                "tool": result.tool_name,
                "success": result.success,
                "error_code": result.error.as_ref().map(|e| e.code.as_str()),
                "duration_ms": result.metadata.duration_ms,
                "exit_code": result.metadata.exit_code,
                "bytes": result.metadata.bytes,
            }),
        ));
    }
}

fn not_implemented(call: &ToolCall) -> ToolResult {
    ToolResult::failure(
        &call.tool_name,
        ToolError::execution_failed(format!("Tool '{}' is not implemented", call.tool_name)),
    )
}

#[async_trait]
impl ToolExecutorPort for LocalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let start = Instant::now();

        let Some(canonical) = self.tool_spec.resolve(&call.tool_name) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("Unknown tool: {}", call.tool_name)),
            );
        };

        let call = if canonical != call.tool_name {
            debug!("Resolved tool alias '{}' -> '{}'", call.tool_name, canonical);
            call.renamed(canonical)
        } else {
            call.clone()
        };

        let Some(definition) = self.tool_spec.get(&call.tool_name) else {
            return not_implemented(&call);
        };
        if let Err(e) = DefaultToolValidator.validate(&call, definition) {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e));
        }

        self.log_call(&call);
        info!(tool = %call.tool_name, "Executing tool");

        let result = self
            .dispatch(&call)
            .await
            .with_duration(start.elapsed().as_millis() as u64);

        info!(
            tool = %result.tool_name,
            success = result.success,
            duration_ms = result.metadata.duration_ms,
            "Tool finished"
        );
        self.log_result(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_application::config::CloneConfig;
    use harvest_application::ports::process_runner::{
        ProcessCommand, ProcessError, ProcessOutput, ProcessRunnerPort,
    };
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// git stand-in: succeeds and creates the destination
    struct FakeGit {
        commands: Mutex<Vec<ProcessCommand>>,
    }

    impl ProcessRunnerPort for FakeGit {
        fn locate(&self, _program: &str) -> Option<PathBuf> {
            Some(PathBuf::from("/usr/bin/git"))
        }

        fn run(&self, command: &ProcessCommand) -> Result<ProcessOutput, ProcessError> {
            self.commands.lock().unwrap().push(command.clone());
            if let Some(dest) = command.args.last() {
                std::fs::create_dir_all(dest).unwrap();
            }
            Ok(ProcessOutput {
                exit_code: Some(0),
                ..Default::default()
            })
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl InvocationLogger for RecordingLogger {
        fn log(&self, event: InvocationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }

    fn executor(credential_dir: &Path) -> (LocalToolExecutor, Arc<FakeGit>, Arc<RecordingLogger>) {
        let git = Arc::new(FakeGit {
            commands: Mutex::new(Vec::new()),
        });
        let logger = Arc::new(RecordingLogger::default());
        let use_case = CloneRepoUseCase::new(
            git.clone(),
            CloneConfig::default().with_credential_dir(credential_dir),
        );
        let executor = LocalToolExecutor::new(use_case).with_logger(logger.clone());
        (executor, git, logger)
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let dir = tempfile::tempdir().unwrap();
        let (executor, _, logger) = executor(dir.path());

        let result = executor.execute(&ToolCall::new("rm_rf")).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert!(logger.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let dir = tempfile::tempdir().unwrap();
        let (executor, git, _) = executor(dir.path());

        let result = executor
            .execute(&ToolCall::new("clone_repo").with_arg("branch", "main"))
            .await;

        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert!(result.error().unwrap().message.contains("repo_url"));
        assert!(git.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_depth_and_unknown_argument() {
        let dir = tempfile::tempdir().unwrap();
        let (executor, git, _) = executor(dir.path());
        let base = ToolCall::new("clone_repo").with_arg("repo_url", "https://github.com/a/b.git");

        let negative = executor.execute(&base.clone().with_arg("depth", -1)).await;
        assert_eq!(negative.error().unwrap().code, "INVALID_ARGUMENT");

        let fractional = executor.execute(&base.clone().with_arg("depth", 1.5)).await;
        assert_eq!(fractional.error().unwrap().code, "INVALID_ARGUMENT");

        let unknown = executor.execute(&base.with_arg("recursive", true)).await;
        assert_eq!(unknown.error().unwrap().code, "INVALID_ARGUMENT");
        assert!(unknown.error().unwrap().message.contains("recursive"));

        assert!(git.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_alias_dispatches_clone() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("checkout");
        let (executor, git, _) = executor(dir.path());

        let result = executor
            .execute(
                &ToolCall::new("git_clone")
                    .with_arg("repo_url", "https://github.com/a/b.git")
                    .with_arg("dest_dir", dest.display().to_string())
                    .with_arg("depth", 1),
            )
            .await;

        assert!(result.is_success(), "{:?}", result.error());
        assert_eq!(result.tool_name, "clone_repo");
        assert_eq!(result.metadata.path, Some(dest.display().to_string()));
        assert_eq!(result.metadata.exit_code, Some(0));
        assert!(result.metadata.duration_ms.is_some());

        let output: serde_json::Value = serde_json::from_str(result.output().unwrap()).unwrap();
        assert_eq!(output["success"], true);
        assert_eq!(output["ownership"], "caller_directory");

        assert!(git.commands.lock().unwrap()[0].args.contains(&"--depth".to_string()));
    }

    #[tokio::test]
    async fn test_token_never_logged() {
        let dir = tempfile::tempdir().unwrap();
        let (executor, _, logger) = executor(dir.path());

        let result = executor
            .execute(
                &ToolCall::new("clone_repo")
                    .with_arg("repo_url", "https://github.com/a/private.git")
                    .with_arg("dest_dir", dir.path().join("p").display().to_string())
                    .with_arg("token", "ghp_supersecret"),
            )
            .await;
        assert!(result.is_success());

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "tool_call");
        assert_eq!(events[0].1["arguments"]["token"], "<redacted>");
        assert_eq!(events[1].0, "tool_result");
        assert_eq!(events[1].1["success"], true);
        for (_, payload) in events.iter() {
            assert!(!payload.to_string().contains("ghp_supersecret"));
        }
        assert!(!result.output().unwrap().contains("ghp_supersecret"));
    }

    #[test]
    fn test_available_tools_without_scrape() {
        let dir = tempfile::tempdir().unwrap();
        let (executor, _, _) = executor(dir.path());
        assert_eq!(executor.available_tools(), vec!["clone_repo"]);
        assert!(executor.has_tool("clone"));
    }

    #[cfg(feature = "web-tools")]
    mod web {
        use super::*;
        use harvest_application::config::ScrapeConfig;
        use harvest_application::ports::page_extractor::PageExtractorPort;
        use harvest_application::ports::scrape_gateway::{
            GatewayResponse, ScrapeGatewayError, ScrapeGatewayPort,
        };
        use harvest_domain::scrape::ExtractedPage;

        struct StaticGateway(Result<GatewayResponse, ScrapeGatewayError>);

        #[async_trait]
        impl ScrapeGatewayPort for StaticGateway {
            async fn fetch(
                &self,
                _params: &[(&'static str, String)],
            ) -> Result<GatewayResponse, ScrapeGatewayError> {
                self.0.clone()
            }
        }

        struct PlainExtractor;

        impl PageExtractorPort for PlainExtractor {
            fn extract(&self, html: &str) -> ExtractedPage {
                ExtractedPage {
                    title: None,
                    text: html.to_string(),
                }
            }
        }

        fn with_scrape(
            dir: &Path,
            response: Result<GatewayResponse, ScrapeGatewayError>,
        ) -> LocalToolExecutor {
            let scrape = ScrapeUrlUseCase::new(
                Arc::new(StaticGateway(response)),
                Arc::new(PlainExtractor),
                ScrapeConfig::default().with_api_key("k"),
            );
            executor(dir).0.with_scrape(scrape)
        }

        #[tokio::test]
        async fn test_scrape_alias_and_bytes() {
            let dir = tempfile::tempdir().unwrap();
            let executor = with_scrape(
                dir.path(),
                Ok(GatewayResponse {
                    status: 200,
                    content_type: Some("text/html".to_string()),
                    body: "hello".to_string(),
                }),
            );

            let result = executor
                .execute(&ToolCall::new("fetch_page").with_arg("url", "https://example.com"))
                .await;

            assert!(result.is_success());
            assert_eq!(result.tool_name, "scrape_url");
            assert_eq!(result.text(), "Source: https://example.com\n\nhello");
            assert_eq!(result.metadata.bytes, Some(result.text().len()));
            assert_eq!(executor.available_tools(), vec!["clone_repo", "scrape_url"]);
        }

        #[tokio::test]
        async fn test_scrape_timeout_code() {
            let dir = tempfile::tempdir().unwrap();
            let executor = with_scrape(dir.path(), Err(ScrapeGatewayError::Timeout));

            let result = executor
                .execute(&ToolCall::new("scrape_url").with_arg("url", "https://example.com"))
                .await;

            assert_eq!(result.error().unwrap().code, "TIMEOUT");
            assert_eq!(
                result.text(),
                "Error: Request to ScrapingBee timed out after 20 seconds"
            );
        }

        #[tokio::test]
        async fn test_render_js_must_be_boolean() {
            let dir = tempfile::tempdir().unwrap();
            let executor = with_scrape(dir.path(), Err(ScrapeGatewayError::Timeout));

            let result = executor
                .execute(
                    &ToolCall::new("scrape_url")
                        .with_arg("url", "https://example.com")
                        .with_arg("render_js", "yes"),
                )
                .await;

            assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        }
    }
}
