// src/lib.rs
//! github-changelog library: renders a repository's GitHub releases as a
//! changelog section for generated documentation.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `ChangelogError`, `ApiError`, `ValidationError`
//! - **Configuration**: `ChangelogSettings`, `DirectiveOptions`, `PipelineConfig`
//! - **Domain model**: `Release`, `DocumentNode`
//! - **Domain types**: `GitHubToken`, `RepoSlug`, `RepositoryTarget`
//! - **Resolution**: URL helpers, git remote inference, the credential chain
//! - **API client**: `GraphQlClient`, `ReleaseSource`, `extract_releases`
//! - **Formatting**: `node_for_release`, `no_token_document`, `render_document`
//! - **Pipeline**: `ChangelogPipeline`, `compute_changelog`

pub mod api;
pub mod config;
pub mod constants;
pub mod credentials;
mod error;
pub mod formatting;
pub mod model;
pub mod output;
pub mod pipeline;
mod process;
pub mod remote;
mod types;

// --- Error Handling ---
pub use crate::error::{ApiError, ChangelogError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    ChangelogSettings, CommandLineInput, DirectiveOptions, OutputFormat, PipelineConfig,
};

// --- Domain Model ---
pub use crate::model::{DocumentNode, Release};

// --- Domain Types ---
pub use crate::types::{GitHubToken, RepoSlug, RepositoryTarget};

// --- Resolution ---
pub use crate::credentials::{get_github_token, is_github_token, CredentialChain};
pub use crate::remote::{
    derive_graphql_endpoint, extract_package_name, extract_repo_name, host_from_url,
    infer_default_repo_url, normalize_remote_url, parse_repo_from_remote_url, root_url_from_url,
    GitRemotes, RepositoryLocator,
};

// --- API Client ---
pub use crate::api::{extract_releases, releases_query, GraphQlClient, GraphQlRequest, ReleaseSource};

// --- Formatting ---
pub use crate::formatting::{
    make_id, no_token_document, node_for_release, release_title, render_document, render_html,
    HtmlContext,
};

// --- Pipeline ---
pub use crate::pipeline::{compute_changelog, ChangelogPipeline};
