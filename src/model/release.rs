use crate::constants::RELEASE_DATE_LENGTH;
use serde::{Deserialize, Serialize};

/// A release as returned by the GitHub GraphQL API.
///
/// Built from the response of a single request and discarded once its
/// document node exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Display title; GitHub leaves it empty when the release was never named.
    pub name: Option<String>,
    /// Pre-rendered HTML body. Trusted and embedded verbatim.
    #[serde(rename = "descriptionHTML")]
    pub description_html: Option<String>,
    pub url: String,
    pub tag_name: String,
    /// ISO-8601 timestamp. Null for drafts.
    pub published_at: Option<String>,
    pub is_draft: bool,
}

impl Release {
    /// The `YYYY-MM-DD` part of `publishedAt`, or an empty string when the
    /// release was never published.
    pub fn published_date(&self) -> &str {
        let published_at = self.published_at.as_deref().unwrap_or_default();
        match published_at.char_indices().nth(RELEASE_DATE_LENGTH) {
            Some((end, _)) => &published_at[..end],
            None => published_at,
        }
    }

    pub fn description_html(&self) -> &str {
        self.description_html.as_deref().unwrap_or_default()
    }
}
