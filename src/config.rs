// src/config.rs
use crate::constants::{GRAPHQL_URL_ENV_VAR, ROOT_REPO_ENV_VAR, TOKEN_ENV_VAR};
use crate::types::GitHubToken;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// GitHub releases page (e.g., "https://github.com/owner/repo/releases"); inferred from git remotes when omitted
    #[arg(long)]
    pub github: Option<String>,

    /// PyPI project page (e.g., "https://pypi.org/project/name") to link each release to
    #[arg(long)]
    pub pypi: Option<String>,

    /// Changelog URL linked from the notice shown when no token is available
    #[arg(long)]
    pub changelog_url: Option<String>,

    /// GitHub API token (defaults to SPHINX_GITHUB_CHANGELOG_TOKEN, then git credential helper, then gh CLI)
    #[arg(long)]
    pub token: Option<String>,

    /// Web root releases URLs are validated against (defaults to SPHINX_GITHUB_CHANGELOG_ROOT_REPO)
    #[arg(long)]
    pub root_repo: Option<String>,

    /// GraphQL endpoint (defaults to SPHINX_GITHUB_CHANGELOG_GRAPHQL_URL, then derived from the repository host)
    #[arg(long)]
    pub graphql_url: Option<String>,

    /// Output format for the rendered changelog
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Write the changelog to this file instead of stdout
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Format the document tree is rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment, as a documentation HTML builder would emit it
    Html,
    /// The document tree as JSON, for external host adapters
    Json,
}

/// Project-wide settings, read once from the environment and explicit
/// overrides, then passed into the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogSettings {
    pub token: Option<GitHubToken>,
    pub root_repo: Option<String>,
    pub graphql_url: Option<String>,
}

impl ChangelogSettings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            token: lookup(TOKEN_ENV_VAR).and_then(GitHubToken::new),
            root_repo: non_empty(lookup(ROOT_REPO_ENV_VAR)),
            graphql_url: non_empty(lookup(GRAPHQL_URL_ENV_VAR)),
        }
    }

    /// Replaces each setting for which an explicit, non-empty value is given.
    pub fn with_overrides(
        mut self,
        token: Option<String>,
        root_repo: Option<String>,
        graphql_url: Option<String>,
    ) -> Self {
        if let Some(token) = token.and_then(GitHubToken::new) {
            self.token = Some(token);
        }
        if let Some(root_repo) = non_empty(root_repo) {
            self.root_repo = Some(root_repo);
        }
        if let Some(graphql_url) = non_empty(graphql_url) {
            self.graphql_url = Some(graphql_url);
        }
        self
    }
}

/// Options given where the changelog is placed in the documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveOptions {
    /// Link shown when the changelog cannot be built for lack of a token.
    pub changelog_url: Option<String>,
    /// Explicit releases page URL.
    pub github: Option<String>,
    /// Explicit PyPI project URL.
    pub pypi: Option<String>,
}

/// Resolved configuration for one command-line run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub settings: ChangelogSettings,
    pub options: DirectiveOptions,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete configuration from command-line input and the
    /// environment. Flags win over environment variables.
    pub fn resolve(cli: CommandLineInput) -> Self {
        Self::resolve_with(cli, ChangelogSettings::from_env())
    }

    /// Like [`PipelineConfig::resolve`], with environment settings supplied
    /// by the caller.
    pub fn resolve_with(cli: CommandLineInput, environment: ChangelogSettings) -> Self {
        let settings = environment.with_overrides(cli.token, cli.root_repo, cli.graphql_url);

        Self {
            settings,
            options: DirectiveOptions {
                changelog_url: non_empty(cli.changelog_url),
                github: non_empty(cli.github),
                pypi: non_empty(cli.pypi),
            },
            format: cli.format,
            output_file: cli.output_file.map(PathBuf::from),
            verbose: cli.verbose,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
