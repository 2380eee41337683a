//! API token discovery.
//!
//! A token is looked up through an ordered [`CredentialChain`] of sources
//! sharing one signature, `host -> Option<token>`. The first source with an
//! answer wins; a source that fails in any way simply has no answer.

mod sources;

pub use sources::{parse_credential_fill, token_from_env, token_from_gh_cli, token_from_git_credential};

use crate::types::GitHubToken;
use std::fmt;

/// A single place a token may come from.
pub type CredentialLookup = Box<dyn Fn(&str) -> Option<GitHubToken> + Send + Sync>;

/// Whether `candidate` has the shape of a GitHub-issued token (`ghp_`, `gho_`,
/// `ghu_`, `ghs_`, ...). Any `gh?_` prefix is accepted so new token kinds work.
pub fn is_github_token(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() >= 4 && bytes.starts_with(b"gh") && bytes[3] == b'_'
}

/// Ordered token sources, tried until one produces a token.
#[derive(Default)]
pub struct CredentialChain {
    sources: Vec<(&'static str, CredentialLookup)>,
}

impl CredentialChain {
    /// An empty chain; it never finds a token.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard order: environment variable, git credential helper,
    /// GitHub CLI.
    pub fn standard() -> Self {
        Self::new()
            .with_source("environment", token_from_env)
            .with_source("git credential helper", token_from_git_credential)
            .with_source("gh cli", token_from_gh_cli)
    }

    /// Appends a source, tried after every source already in the chain.
    pub fn with_source<F>(mut self, name: &'static str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<GitHubToken> + Send + Sync + 'static,
    {
        self.sources.push((name, Box::new(lookup)));
        self
    }

    /// Names of the sources, in the order they are tried.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|(name, _)| *name).collect()
    }

    /// Looks up a token for `host`, short-circuiting on the first hit.
    pub fn resolve(&self, host: &str) -> Option<GitHubToken> {
        for (name, lookup) in &self.sources {
            if let Some(token) = lookup(host) {
                log::debug!("Using GitHub token from {} for {}", name, host);
                return Some(token);
            }
            log::debug!("No GitHub token from {} for {}", name, host);
        }
        None
    }
}

impl fmt::Debug for CredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialChain")
            .field("sources", &self.source_names())
            .finish()
    }
}

/// Finds a token for `host` through the standard chain.
pub fn get_github_token(host: &str) -> Option<GitHubToken> {
    CredentialChain::standard().resolve(host)
}
