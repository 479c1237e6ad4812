//! Process runner port
//!
//! The external-command abstraction used by `clone_repo`: locate an
//! executable on the search path, run it with extra environment variables,
//! and collect exit code and captured output.

use std::path::PathBuf;
use thiserror::Error;

/// A command to run: program, arguments and environment additions.
///
/// The child inherits the current process environment; `env` entries are
/// layered on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl ProcessCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_env(mut self, env: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env.extend(env);
        self
    }

    /// Value of an environment addition, if set
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Errors starting or waiting for a process
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Port for running external commands
///
/// The call blocks until the process exits; no timeout is applied.
pub trait ProcessRunnerPort: Send + Sync {
    /// Resolve `program` against the search path
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run a command to completion, capturing stdout and stderr
    fn run(&self, command: &ProcessCommand) -> Result<ProcessOutput, ProcessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_builder() {
        let command = ProcessCommand::new("/usr/bin/git")
            .with_args(["clone", "https://example.com/r.git"])
            .with_env([("GIT_TERMINAL_PROMPT".to_string(), "0".to_string())]);

        assert_eq!(command.args, vec!["clone", "https://example.com/r.git"]);
        assert_eq!(command.env_value("GIT_TERMINAL_PROMPT"), Some("0"));
        assert_eq!(command.env_value("HOME"), None);
    }

    #[test]
    fn test_output_success() {
        assert!(ProcessOutput { exit_code: Some(0), ..Default::default() }.success());
        assert!(!ProcessOutput { exit_code: Some(128), ..Default::default() }.success());
        assert!(!ProcessOutput::default().success());
    }
}
