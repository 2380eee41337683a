//! GitHub API interaction — the ability to list a repository's releases.
//!
//! The HTTP layer ([`client`]) knows nothing about releases, the query
//! builder ([`query`]) knows nothing about HTTP, and the parser ([`parser`])
//! only sees decoded JSON.

pub mod client;
pub mod parser;
pub mod query;

use crate::error::ApiError;
use crate::model::Release;
use crate::types::{GitHubToken, RepoSlug};

/// The ability to list a repository's releases.
///
/// The pipeline depends on this trait, never on HTTP details.
pub trait ReleaseSource {
    /// Releases of `slug`, newest first, with entries the caller may not see
    /// already removed.
    fn fetch_releases(
        &self,
        slug: &RepoSlug,
        endpoint: &str,
        token: &GitHubToken,
    ) -> Result<Vec<Release>, ApiError>;
}

pub use client::GraphQlClient;
pub use parser::extract_releases;
pub use query::{releases_query, GraphQlRequest};
