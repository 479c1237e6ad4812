//! System process runner.
//!
//! Locates executables with [`which`] and runs them with `std::process::Command`,
//! stdin closed and stdout/stderr captured. The call blocks until the child exits.

use harvest_application::ports::process_runner::{
    ProcessCommand, ProcessError, ProcessOutput, ProcessRunnerPort,
};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs commands on the local machine.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunnerPort for SystemProcessRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, command: &ProcessCommand) -> Result<ProcessOutput, ProcessError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(
            program = %command.program.display(),
            env = ?command.env.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            "Spawning process"
        );

        let output = cmd.output().map_err(|source| ProcessError::Spawn {
            program: command.program.display().to_string(),
            source,
        })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
