//! Clone parameters: how `clone_repo` runs git.

use harvest_domain::repository::GIT_PROGRAM;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of temporary holder directories created when no destination is given
pub const DEFAULT_TEMP_PREFIX: &str = "harvest_clone_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneConfig {
    /// Name (or path) of the git executable
    pub git_program: String,
    /// Prefix for temporary holder directories
    pub temp_prefix: String,
    /// Directory for credential files (None = system temp directory)
    pub credential_dir: Option<PathBuf>,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            git_program: GIT_PROGRAM.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
            credential_dir: None,
        }
    }
}

impl CloneConfig {
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    pub fn with_credential_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.credential_dir = Some(dir.into());
        self
    }

    /// Directory credential files are created in
    pub fn credential_dir(&self) -> PathBuf {
        self.credential_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CloneConfig::default();
        assert_eq!(config.git_program, "git");
        assert_eq!(config.temp_prefix, "harvest_clone_");
        assert_eq!(config.credential_dir(), std::env::temp_dir());
    }

    #[test]
    fn test_builder() {
        let config = CloneConfig::default()
            .with_git_program("/opt/git/bin/git")
            .with_credential_dir("/run/harvest");
        assert_eq!(config.git_program, "/opt/git/bin/git");
        assert_eq!(config.credential_dir(), PathBuf::from("/run/harvest"));
    }
}
