//! Clone result value object

use serde::{Deserialize, Serialize};

/// Who owns the directory a successful clone was written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationOwnership {
    /// The caller named the destination directory
    CallerDirectory,
    /// A temporary holder directory was allocated and handed over to the
    /// caller; nothing removes it automatically
    TransferredTempDir,
}

/// Outcome of a `clone_repo` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloned_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<DestinationOwnership>,
}

impl CloneResult {
    pub fn cloned(path: impl Into<String>, ownership: DestinationOwnership) -> Self {
        let path = path.into();
        Self {
            success: true,
            message: format!("Repository cloned to {}", path),
            cloned_path: Some(path),
            ownership: Some(ownership),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            cloned_path: None,
            ownership: None,
        }
    }

    pub fn git_missing(program: &str) -> Self {
        Self::failed(format!("`{}` executable not found in PATH.", program))
    }

    pub fn clone_failed(detail: impl AsRef<str>) -> Self {
        Self::failed(format!("git clone failed: {}", detail.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloned() {
        let result = CloneResult::cloned("/tmp/repo", DestinationOwnership::CallerDirectory);
        assert!(result.success);
        assert_eq!(result.message, "Repository cloned to /tmp/repo");
        assert_eq!(result.cloned_path.as_deref(), Some("/tmp/repo"));
    }

    #[test]
    fn test_failures_have_no_path() {
        assert_eq!(
            CloneResult::git_missing("git").message,
            "`git` executable not found in PATH."
        );
        let failed = CloneResult::clone_failed("fatal: repository not found");
        assert!(!failed.success);
        assert_eq!(failed.message, "git clone failed: fatal: repository not found");
        assert!(failed.cloned_path.is_none());
        assert!(failed.ownership.is_none());
    }

    #[test]
    fn test_serialization_omits_absent_path() {
        let json = serde_json::to_value(CloneResult::failed("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "message": "nope"}));

        let json = serde_json::to_value(CloneResult::cloned(
            "/tmp/h/repo",
            DestinationOwnership::TransferredTempDir,
        ))
        .unwrap();
        assert_eq!(json["ownership"], "transferred_temp_dir");
    }
}
