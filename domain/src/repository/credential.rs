//! Credential record for token-authenticated clones
//!
//! git's `store` credential helper reads lines of the form
//! `https://<username>:<token>@<host>`. The record is derived from the
//! request; writing it to disk is the application layer's job.

use super::request::CloneRequest;
use crate::core::error::DomainError;
use std::fmt;

/// Host whose token authentication expects the `x-access-token` username
pub const GITHUB_HOST: &str = "github.com";

/// Username used with GitHub tokens
pub const GITHUB_TOKEN_USERNAME: &str = "x-access-token";

/// Username used with tokens for every other host (GitLab, Bitbucket, Gitea...)
pub const DEFAULT_TOKEN_USERNAME: &str = "oauth2";

/// Return the network location (authority) of a URL: everything between
/// `scheme://` and the first `/`, `?` or `#`.
pub fn network_location(url: &str) -> Result<&str, DomainError> {
    let (_, rest) = url
        .split_once("://")
        .ok_or_else(|| DomainError::InvalidRepositoryUrl(url.to_string()))?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let netloc = &rest[..end];
    if netloc.is_empty() {
        return Err(DomainError::InvalidRepositoryUrl(url.to_string()));
    }
    Ok(netloc)
}

/// Network location without any `user[:password]@` prefix
fn without_userinfo(netloc: &str) -> &str {
    netloc.rsplit_once('@').map_or(netloc, |(_, h)| h)
}

/// Host name of a network location, without userinfo or port
fn host_name(netloc: &str) -> &str {
    let host_port = without_userinfo(netloc);
    if host_port.starts_with('[') {
        return host_port
            .find(']')
            .map_or(host_port, |end| &host_port[..=end]);
    }
    host_port.split(':').next().unwrap_or(host_port)
}

/// One line of git's credential store
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    token: String,
    pub host: String,
}

impl CredentialRecord {
    /// Derive the record for a request. Returns `Ok(None)` when no token was given.
    pub fn for_request(request: &CloneRequest) -> Result<Option<Self>, DomainError> {
        let Some(token) = request.token.as_deref() else {
            return Ok(None);
        };

        let netloc = network_location(&request.repo_url)?;
        let username = match request.username_hint.as_deref() {
            Some(hint) => hint.to_string(),
            None if host_name(netloc).eq_ignore_ascii_case(GITHUB_HOST) => {
                GITHUB_TOKEN_USERNAME.to_string()
            }
            None => DEFAULT_TOKEN_USERNAME.to_string(),
        };

        Ok(Some(Self {
            username,
            token: token.to_string(),
            host: without_userinfo(netloc).to_string(),
        }))
    }

    /// The credential-store line, newline terminated
    pub fn to_line(&self) -> String {
        format!("https://{}:{}@{}\n", self.username, self.token, self.host)
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}
