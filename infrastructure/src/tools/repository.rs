//! clone_repo tool: clone a git repository into a local directory

use harvest_application::use_cases::clone_repo::CloneRepoUseCase;
use harvest_domain::repository::CloneRequest;
use harvest_domain::tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
use std::sync::Arc;

/// Tool name constant
pub const CLONE_REPO: &str = "clone_repo";

/// Get the tool definition for clone_repo
pub fn clone_repo_definition() -> ToolDefinition {
    ToolDefinition::new(
        CLONE_REPO,
        "Clone a git repository. Supports a specific branch or tag, shallow clones, \
         a destination directory, and token authentication for private repositories. \
         Returns the local path of the clone.",
        RiskLevel::High,
    )
    .with_parameter(
        ToolParameter::new("repo_url", "URL of the repository to clone", true).with_type("string"),
    )
    .with_parameter(
        ToolParameter::new("branch", "Branch or tag to check out", false).with_type("string"),
    )
    .with_parameter(
        ToolParameter::new(
            "depth",
            "Create a shallow clone with this many commits of history",
            false,
        )
        .with_type("integer"),
    )
    .with_parameter(
        ToolParameter::new(
            "dest_dir",
            "Directory to clone into (default: a new temporary directory)",
            false,
        )
        .with_type("path"),
    )
    .with_parameter(
        ToolParameter::new("token", "Access token for private repositories", false)
            .with_type("string")
            .sensitive(),
    )
    .with_parameter(
        ToolParameter::new(
            "username_hint",
            "Username to pair with the token (default: x-access-token on github.com, oauth2 elsewhere)",
            false,
        )
        .with_type("string"),
    )
}

/// Execute the clone_repo tool.
///
/// git runs on the blocking thread pool. Once git has been attempted the
/// output is always the JSON form of the clone result (`success`, `message`,
/// `cloned_path`, `ownership`); a failure also carries an `EXECUTION_FAILED`
/// error with the message.
pub async fn execute_clone_repo(use_case: &Arc<CloneRepoUseCase>, call: &ToolCall) -> ToolResult {
    let request = match CloneRequest::from_tool_call(call) {
        Ok(r) => r,
        Err(e) => return ToolResult::failure(CLONE_REPO, ToolError::invalid_argument(e.to_string())),
    };

    let use_case = Arc::clone(use_case);
    let output = match tokio::task::spawn_blocking(move || use_case.run(&request)).await {
        Ok(output) => output,
        Err(e) => {
            return ToolResult::failure(
                CLONE_REPO,
                ToolError::execution_failed(format!("Clone task failed: {}", e)),
            );
        }
    };

    let metadata = ToolResultMetadata {
        path: output.result.cloned_path.clone(),
        exit_code: output.exit_code,
        ..Default::default()
    };

    let json = serde_json::to_string_pretty(&output.result)
        .unwrap_or_else(|_| output.result.message.clone());

    let result = if output.result.success {
        ToolResult::success(CLONE_REPO, json)
    } else {
        ToolResult::failure(
            CLONE_REPO,
            ToolError::execution_failed(output.result.message.clone()),
        )
        .with_output(json)
    };
    result.with_metadata(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_application::config::CloneConfig;
    use harvest_application::ports::process_runner::{
        ProcessCommand, ProcessError, ProcessOutput, ProcessRunnerPort,
    };
    use std::path::PathBuf;

    /// git stand-in that always fails like an unreachable remote
    struct FailingGit;

    impl ProcessRunnerPort for FailingGit {
        fn locate(&self, _program: &str) -> Option<PathBuf> {
            Some(PathBuf::from("/usr/bin/git"))
        }

        fn run(&self, _command: &ProcessCommand) -> Result<ProcessOutput, ProcessError> {
            Ok(ProcessOutput {
                exit_code: Some(128),
                stdout: String::new(),
                stderr: "fatal: repository 'https://github.com/a/missing.git/' not found\n"
                    .to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_failed_clone_output_has_result_shape() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = Arc::new(CloneRepoUseCase::new(
            Arc::new(FailingGit),
            CloneConfig::default().with_credential_dir(dir.path()),
        ));
        let call = ToolCall::new(CLONE_REPO)
            .with_arg("repo_url", "https://github.com/a/missing.git")
            .with_arg("dest_dir", dir.path().join("out").display().to_string());

        let result = execute_clone_repo(&use_case, &call).await;

        assert!(!result.is_success());
        let error = result.error().unwrap();
        assert_eq!(error.code, "EXECUTION_FAILED");
        assert!(error.message.starts_with("git clone failed: fatal: repository"));
        assert_eq!(result.metadata.exit_code, Some(128));

        let output: serde_json::Value = serde_json::from_str(result.output().unwrap()).unwrap();
        assert_eq!(output["success"], false);
        assert_eq!(output["message"], error.message.as_str());
        assert!(output.get("cloned_path").is_none());
    }

    #[test]
    fn test_token_parameter_is_sensitive() {
        let definition = clone_repo_definition();
        assert!(definition.is_high_risk());
        assert!(definition.parameter("token").unwrap().sensitive);
        assert!(!definition.parameter("repo_url").unwrap().sensitive);
        assert!(definition.parameter("repo_url").unwrap().required);
        assert_eq!(definition.parameter("depth").unwrap().param_type, "integer");
    }
}
