//! Repository inference from the local git configuration.

use super::{normalize_remote_url, RepositoryLocator};
use crate::process::capture_stdout;
use std::collections::HashMap;
use std::process::Command;

/// Remotes preferred as the changelog source, most preferred first.
const PREFERRED_REMOTES: [&str; 2] = ["upstream", "origin"];

/// Locates the repository through `git remote -v` in the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRemotes;

impl RepositoryLocator for GitRemotes {
    fn default_repo_url(&self) -> Option<String> {
        infer_default_repo_url()
    }
}

/// Guesses the repository URL from the configured git remotes.
///
/// Not being inside a repository, git missing, or no usable remote all
/// yield `None`.
pub fn infer_default_repo_url() -> Option<String> {
    let listing = capture_stdout(Command::new("git").args(["remote", "-v"]), None)?;
    let url = select_default_remote(&listing);
    match &url {
        Some(url) => log::debug!("Inferred repository {} from git remotes", url),
        None => log::debug!("No upstream or origin remote points at a usable URL"),
    }
    url
}

/// Picks the preferred remote from `git remote -v` output.
///
/// Only fetch URLs that normalize to an HTTPS repository URL are considered;
/// `upstream` wins over `origin`.
pub fn select_default_remote(listing: &str) -> Option<String> {
    let mut remotes: HashMap<&str, String> = HashMap::new();

    for line in listing.lines() {
        let mut fields = line.split_whitespace();
        let (Some(name), Some(url), Some(direction)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        if direction != "(fetch)" {
            continue;
        }
        if let Some(normalized) = normalize_remote_url(url) {
            remotes.insert(name, normalized);
        }
    }

    PREFERRED_REMOTES
        .iter()
        .find_map(|name| remotes.remove(name))
}
