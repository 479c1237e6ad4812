//! Clone repository use case
//!
//! Runs `git clone` for a [`CloneRequest`]:
//!
//! 1. **Locate git** - missing executable is reported before any side effect
//! 2. **Resolve destination** - requested directory, or a temporary holder
//! 3. **Credentials** - with a token, write a short-lived credential file
//! 4. **Clone** - run git with prompting disabled
//! 5. **Report** - hand the directory over on success; the credential file
//!    is removed on every path
//!
//! Every failure comes back as a [`CloneResult`] with `success == false`.

mod credential_file;
mod destination;

use crate::config::CloneConfig;
use crate::ports::process_runner::{ProcessCommand, ProcessOutput, ProcessRunnerPort};
use credential_file::CredentialFile;
use destination::Destination;
use harvest_domain::repository::{
    CloneRequest, CloneResult, CredentialRecord, clone_arguments, credential_environment,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a clone together with git's exit code (when git ran)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRepoOutput {
    pub result: CloneResult,
    pub exit_code: Option<i32>,
}

impl From<CloneResult> for CloneRepoOutput {
    fn from(result: CloneResult) -> Self {
        Self {
            result,
            exit_code: None,
        }
    }
}

pub struct CloneRepoUseCase {
    runner: Arc<dyn ProcessRunnerPort>,
    config: CloneConfig,
}

impl CloneRepoUseCase {
    pub fn new(runner: Arc<dyn ProcessRunnerPort>, config: CloneConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &CloneConfig {
        &self.config
    }

    /// Clone and return only the result
    pub fn execute(&self, request: &CloneRequest) -> CloneResult {
        self.run(request).result
    }

    /// Clone and return the result plus git's exit code
    pub fn run(&self, request: &CloneRequest) -> CloneRepoOutput {
        let Some(git) = self.runner.locate(&self.config.git_program) else {
            warn!("{} not found on the search path", self.config.git_program);
            return CloneResult::git_missing(&self.config.git_program).into();
        };

        let destination =
            match Destination::resolve(request.dest_dir.as_deref(), &self.config.temp_prefix) {
                Ok(destination) => destination,
                Err(e) => {
                    let target = request
                        .dest_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "temporary directory".to_string());
                    return CloneResult::failed(format!(
                        "Failed to prepare destination {}: {}",
                        target, e
                    ))
                    .into();
                }
            };

        let credential = match self.prepare_credentials(request) {
            Ok(credential) => credential,
            Err(message) => return CloneResult::failed(message).into(),
        };

        let mut command =
            ProcessCommand::new(git).with_args(clone_arguments(request, destination.path()));
        if let Some(file) = &credential {
            command = command.with_env(credential_environment(file.path()));
        }

        info!(
            repo_url = %request.repo_url,
            destination = %destination.path().display(),
            authenticated = credential.is_some(),
            "Cloning repository"
        );
        debug!(args = ?command.args, "git command");

        let outcome = self.runner.run(&command);
        drop(credential);

        match outcome {
            Ok(output) if output.success() => {
                let (path, ownership) = destination.hand_over();
                let path = path.display().to_string();
                info!(path = %path, ?ownership, "Clone finished");
                CloneRepoOutput {
                    result: CloneResult::cloned(path, ownership),
                    exit_code: output.exit_code,
                }
            }
            Ok(output) => {
                warn!(exit_code = ?output.exit_code, "git clone failed");
                CloneRepoOutput {
                    result: CloneResult::clone_failed(failure_detail(&output)),
                    exit_code: output.exit_code,
                }
            }
            Err(e) => {
                warn!("git clone could not run: {}", e);
                CloneResult::clone_failed(e.to_string()).into()
            }
        }
    }

    fn prepare_credentials(&self, request: &CloneRequest) -> Result<Option<CredentialFile>, String> {
        let record = CredentialRecord::for_request(request)
            .map_err(|e| format!("Failed to prepare credentials: {}", e))?;
        match record {
            Some(record) => CredentialFile::create(&record, &self.config.credential_dir())
                .map(Some)
                .map_err(|e| format!("Failed to prepare credentials: {}", e)),
            None => Ok(None),
        }
    }
}

/// git's stderr, or the exit status when it printed nothing
fn failure_detail(output: &ProcessOutput) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match output.exit_code {
        Some(code) => format!("git exited with status {}", code),
        None => "git was terminated by a signal".to_string(),
    }
}
