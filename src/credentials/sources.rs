//! The individual token sources.

use super::is_github_token;
use crate::constants::TOKEN_ENV_VAR;
use crate::process::capture_stdout;
use crate::types::GitHubToken;
use std::process::Command;

/// Token from the `SPHINX_GITHUB_CHANGELOG_TOKEN` environment variable.
///
/// The variable applies to every host.
pub fn token_from_env(_host: &str) -> Option<GitHubToken> {
    std::env::var(TOKEN_ENV_VAR).ok().and_then(GitHubToken::new)
}

/// Token stored by git's configured credential helper for `host`.
pub fn token_from_git_credential(host: &str) -> Option<GitHubToken> {
    let request = format!("protocol=https\nhost={}\n", host);
    let mut command = Command::new("git");
    command
        .args(["credential", "fill"])
        .env("GIT_TERMINAL_PROMPT", "0");

    let response = capture_stdout(&mut command, Some(&request))?;
    parse_credential_fill(&response)
}

/// Extracts the password from `git credential fill` output when it looks
/// like a GitHub token.
///
/// A helper may hold an ordinary account password for the host; that must
/// never be sent as an API token, so anything not shaped like one is
/// ignored.
pub fn parse_credential_fill(response: &str) -> Option<GitHubToken> {
    response
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| *key == "password")
        .map(|(_, value)| value)
        .filter(|value| is_github_token(value))
        .and_then(GitHubToken::new)
}

/// Token the GitHub CLI is logged in with for `host`.
pub fn token_from_gh_cli(host: &str) -> Option<GitHubToken> {
    let hostname = format!("--hostname={}", host);
    let output = capture_stdout(Command::new("gh").args(["auth", "token", hostname.as_str()]), None)?;
    GitHubToken::new(output)
}
