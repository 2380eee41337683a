// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer token for the GitHub API.
///
/// The value is opaque: `Debug` redacts it and there is no `Display`, so a
/// token can only end up in a log line by calling [`GitHubToken::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    /// Wraps a token, treating blank input as "no token".
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw token, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken(<redacted>)")
    }
}

/// An `owner/repo` pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    /// Parses `owner/repo`. Exactly one `/` is allowed and both halves must be
    /// non-empty GitHub names (they are interpolated into the GraphQL query).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::RepositorySlug {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let (owner, repo) = value
            .split_once('/')
            .ok_or_else(|| invalid("expected the form owner/repo"))?;

        if repo.contains('/') {
            return Err(invalid("expected exactly one '/' between owner and repo"));
        }
        if owner.is_empty() || repo.is_empty() {
            return Err(invalid("owner and repo must not be empty"));
        }
        if !owner.chars().chain(repo.chars()).all(is_name_char) {
            return Err(invalid(
                "only letters, digits, '-', '_' and '.' are allowed",
            ));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The repository a changelog is built for, and where to ask about it.
///
/// Derived once per pipeline run, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub slug: RepoSlug,
    /// The releases page the target was resolved from.
    pub releases_url: String,
    pub graphql_endpoint: String,
    /// `{scheme}://{host}/` of the hosting instance.
    pub root_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_blank_is_absent() {
        assert!(GitHubToken::new("").is_none());
        assert!(GitHubToken::new("  \n").is_none());
        assert_eq!(
            GitHubToken::new("ghp_abc\n").map(|t| t.expose().to_string()),
            Some("ghp_abc".to_string())
        );
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = GitHubToken::new("ghp_supersecret").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("supersecret"));
    }

    #[test]
    fn test_repo_slug_validation() {
        let slug = RepoSlug::parse("ewjoachim/sphinx-github-changelog").unwrap();
        assert_eq!(slug.owner(), "ewjoachim");
        assert_eq!(slug.repo(), "sphinx-github-changelog");
        assert_eq!(slug.to_string(), "ewjoachim/sphinx-github-changelog");

        assert!(RepoSlug::parse("a/b.c").is_ok());
        assert!(RepoSlug::parse("ab").is_err());
        assert!(RepoSlug::parse("a/b/c").is_err());
        assert!(RepoSlug::parse("/b").is_err());
        assert!(RepoSlug::parse("a/").is_err());
        assert!(RepoSlug::parse("a/b\"){").is_err());
    }
}
