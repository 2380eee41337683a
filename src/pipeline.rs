// src/pipeline.rs
//! The changelog pipeline: resolve the repository, find a token, fetch the
//! releases and turn them into document nodes.
//!
//! Every collaborator that touches the outside world (git, credential
//! helpers, the network) sits behind a trait or closure, so each stage can be
//! tested with fakes.

use crate::api::{GraphQlClient, ReleaseSource};
use crate::config::{ChangelogSettings, DirectiveOptions};
use crate::constants::RELEASES_PATH_SUFFIX;
use crate::credentials::CredentialChain;
use crate::error::{ChangelogError, Result};
use crate::formatting::{no_token_document, node_for_release};
use crate::model::DocumentNode;
use crate::remote::{
    derive_graphql_endpoint, extract_package_name, extract_repo_name, host_from_url,
    parse_repo_from_remote_url, root_url_from_url, GitRemotes, RepositoryLocator,
};
use crate::types::{GitHubToken, RepositoryTarget};

/// Orchestrates one changelog build.
pub struct ChangelogPipeline {
    settings: ChangelogSettings,
    locator: Box<dyn RepositoryLocator>,
    credentials: CredentialChain,
    source: Box<dyn ReleaseSource>,
}

impl ChangelogPipeline {
    /// A pipeline wired to git remotes, the standard credential chain and
    /// the GitHub GraphQL API.
    pub fn new(settings: ChangelogSettings) -> Result<Self> {
        Ok(Self::with_collaborators(
            settings,
            Box::new(GitRemotes),
            CredentialChain::standard(),
            Box::new(GraphQlClient::new()?),
        ))
    }

    pub fn with_collaborators(
        settings: ChangelogSettings,
        locator: Box<dyn RepositoryLocator>,
        credentials: CredentialChain,
        source: Box<dyn ReleaseSource>,
    ) -> Self {
        Self {
            settings,
            locator,
            credentials,
            source,
        }
    }

    /// Replaces how the repository is guessed when no URL is configured.
    pub fn with_locator(mut self, locator: impl RepositoryLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Replaces the token sources tried when no token is configured.
    pub fn with_credentials(mut self, credentials: CredentialChain) -> Self {
        self.credentials = credentials;
        self
    }

    /// Replaces where releases are fetched from.
    pub fn with_source(mut self, source: impl ReleaseSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn settings(&self) -> &ChangelogSettings {
        &self.settings
    }

    /// Builds the changelog for `options`.
    ///
    /// A missing token is not an error: the result is then a single warning
    /// (plus a tip linking `changelog_url`, when given).
    pub fn compute_changelog(&self, options: &DirectiveOptions) -> Result<Vec<DocumentNode>> {
        let target = self.resolve_target(options)?;
        log::debug!(
            "Building changelog for {} from {}",
            target.slug,
            target.graphql_endpoint
        );

        let Some(token) = self.resolve_token(&target) else {
            log::warn!(
                "No GitHub token found for {}; rendering a placeholder changelog",
                host_from_url(&target.releases_url)
            );
            return Ok(no_token_document(options.changelog_url.as_deref()));
        };

        let releases = self
            .source
            .fetch_releases(&target.slug, &target.graphql_endpoint, &token)?;
        let package_name = extract_package_name(options.pypi.as_deref())?;

        let nodes: Vec<DocumentNode> = releases
            .iter()
            .filter_map(|release| node_for_release(release, package_name.as_deref()))
            .collect();

        log::debug!(
            "Rendered {} of {} releases ({} drafts skipped)",
            nodes.len(),
            releases.len(),
            releases.len() - nodes.len()
        );

        Ok(nodes)
    }

    /// Works out which repository to query and where.
    ///
    /// An explicit `github` URL is validated against the configured root, or
    /// against its own web root when none is configured. Otherwise the
    /// repository is inferred through the locator. Empty values count as
    /// unset.
    pub fn resolve_target(&self, options: &DirectiveOptions) -> Result<RepositoryTarget> {
        let (slug, releases_url, root_url) = match non_empty(options.github.as_deref()) {
            Some(url) => {
                let root_url = match non_empty(self.settings.root_repo.as_deref()) {
                    Some(root) => root.to_string(),
                    None => root_url_from_url(url),
                };
                let slug = extract_repo_name(url, Some(root_url.as_str()))?;
                log::debug!("Using configured releases URL {}", url);
                (slug, url.to_string(), root_url)
            }
            None => {
                let remote = self
                    .locator
                    .default_repo_url()
                    .ok_or(ChangelogError::RepositoryNotConfigured)?;
                let slug = parse_repo_from_remote_url(&remote)
                    .ok_or(ChangelogError::RepositoryNotConfigured)?;
                log::debug!("Using repository {} inferred from git remote {}", slug, remote);
                let releases_url = format!("{}{}", remote, RELEASES_PATH_SUFFIX);
                let root_url = root_url_from_url(&releases_url);
                (slug, releases_url, root_url)
            }
        };

        let graphql_endpoint = match non_empty(self.settings.graphql_url.as_deref()) {
            Some(endpoint) => endpoint.to_string(),
            None => derive_graphql_endpoint(&releases_url),
        };

        Ok(RepositoryTarget {
            slug,
            releases_url,
            graphql_endpoint,
            root_url,
        })
    }

    /// The configured token, or the first one the credential chain finds for
    /// the repository's host.
    fn resolve_token(&self, target: &RepositoryTarget) -> Option<GitHubToken> {
        if let Some(token) = &self.settings.token {
            log::debug!("Using configured GitHub token");
            return Some(token.clone());
        }
        self.credentials.resolve(&host_from_url(&target.releases_url))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Builds the changelog for `options` with the default collaborators.
pub fn compute_changelog(
    settings: ChangelogSettings,
    options: &DirectiveOptions,
) -> Result<Vec<DocumentNode>> {
    ChangelogPipeline::new(settings)?.compute_changelog(options)
}
