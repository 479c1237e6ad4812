//! Clone request value object

use crate::core::error::DomainError;
use crate::tool::entities::ToolCall;
use std::fmt;
use std::path::PathBuf;

/// Structured arguments of a `clone_repo` call
#[derive(Clone, PartialEq, Eq)]
pub struct CloneRequest {
    /// Full URL of the remote (e.g. `https://github.com/user/project.git`)
    pub repo_url: String,
    /// Branch, tag or commit to check out as part of the clone
    pub branch: Option<String>,
    /// Shallow clone depth
    pub depth: Option<u32>,
    /// Destination directory; a temporary directory is used when absent
    pub dest_dir: Option<PathBuf>,
    /// Access token for private repositories
    pub token: Option<String>,
    /// Username paired with the token
    pub username_hint: Option<String>,
}

impl CloneRequest {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            branch: None,
            depth: None,
            dest_dir: None,
            token: None,
            username_hint: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_dest_dir(mut self, dest_dir: impl Into<PathBuf>) -> Self {
        self.dest_dir = Some(dest_dir.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_username_hint(mut self, username: impl Into<String>) -> Self {
        self.username_hint = Some(username.into());
        self
    }

    /// Build a request from `clone_repo` tool arguments.
    ///
    /// `depth` must be a positive integer that fits in `u32`.
    pub fn from_tool_call(call: &ToolCall) -> Result<Self, DomainError> {
        let repo_url = call
            .get_string("repo_url")
            .ok_or_else(|| DomainError::MissingArgument("repo_url".to_string()))?;

        let depth = match call.arguments.get("depth") {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => {
                let depth = value
                    .as_u64()
                    .filter(|d| *d > 0)
                    .and_then(|d| u32::try_from(d).ok())
                    .ok_or_else(|| {
                        DomainError::invalid_argument("depth", "must be a positive integer")
                    })?;
                Some(depth)
            }
        };

        Ok(Self {
            repo_url: repo_url.to_string(),
            branch: call.get_string("branch").map(str::to_string),
            depth,
            dest_dir: call.get_string("dest_dir").map(PathBuf::from),
            token: call.get_string("token").map(str::to_string),
            username_hint: call.get_string("username_hint").map(str::to_string),
        })
    }
}

impl fmt::Debug for CloneRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloneRequest")
            .field("repo_url", &self.repo_url)
            .field("branch", &self.branch)
            .field("depth", &self.depth)
            .field("dest_dir", &self.dest_dir)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("username_hint", &self.username_hint)
            .finish()
    }
}
