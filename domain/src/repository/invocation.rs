//! `git clone` argument and environment construction

use super::request::CloneRequest;
use std::path::Path;

/// Default name of the git executable
pub const GIT_PROGRAM: &str = "git";

/// Arguments passed to git (after the program name) for a clone request
pub fn clone_arguments(request: &CloneRequest, destination: &Path) -> Vec<String> {
    let mut args = vec!["clone".to_string()];

    if let Some(branch) = &request.branch {
        args.push("--branch".to_string());
        args.push(branch.clone());
    }

    if let Some(depth) = request.depth {
        args.push("--depth".to_string());
        args.push(depth.to_string());
        args.push("--shallow-submodules".to_string());
        args.push("--no-tags".to_string());
    }

    args.push(request.repo_url.clone());
    args.push(destination.to_string_lossy().into_owned());
    args
}

/// Environment that keeps git from prompting and makes its `store`
/// credential helper, pointed at `credential_file`, the only helper.
///
/// The helpers are injected through `GIT_CONFIG_COUNT`/`GIT_CONFIG_KEY_n`/
/// `GIT_CONFIG_VALUE_n` (git >= 2.31); git has no dedicated variable for it.
/// `credential.helper` is multi-valued, so an empty entry first clears the
/// helpers inherited from the system, global and repository config.
pub fn credential_environment(credential_file: &Path) -> Vec<(String, String)> {
    vec![
        ("GIT_TERMINAL_PROMPT".to_string(), "0".to_string()),
        ("GIT_ASKPASS".to_string(), "echo".to_string()),
        ("GIT_CONFIG_COUNT".to_string(), "2".to_string()),
        ("GIT_CONFIG_KEY_0".to_string(), "credential.helper".to_string()),
        ("GIT_CONFIG_VALUE_0".to_string(), String::new()),
        ("GIT_CONFIG_KEY_1".to_string(), "credential.helper".to_string()),
        (
            "GIT_CONFIG_VALUE_1".to_string(),
            format!("store --file={}", credential_file.display()),
        ),
    ]
}
