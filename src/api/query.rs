//! GraphQL query construction.

use crate::constants::GITHUB_RELEASES_PAGE_SIZE;
use crate::types::RepoSlug;
use serde::Serialize;

/// Body of a GraphQL POST request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Single-line query for the latest releases of `slug`, newest first.
///
/// `RepoSlug` only admits GitHub name characters, so interpolating it into
/// the string literal cannot break out of the quotes.
pub fn releases_query(slug: &RepoSlug) -> String {
    format!(
        "query {{ repository(owner: \"{owner}\", name: \"{repo}\") {{ \
         releases(orderBy: {{field: CREATED_AT, direction: DESC}}, first:{first}) {{ \
         nodes {{ name, descriptionHTML, url, tagName, publishedAt, isDraft }} }} }} }}",
        owner = slug.owner(),
        repo = slug.repo(),
        first = GITHUB_RELEASES_PAGE_SIZE,
    )
}
