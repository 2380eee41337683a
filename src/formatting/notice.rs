// src/formatting/notice.rs
//! The document shown instead of a changelog when no API token is available.

use crate::constants::{HOST_CONFIG_FILE, TOKEN_ENV_VAR, TOKEN_PARAMETER};
use crate::model::DocumentNode;

/// A warning explaining how to provide a token, followed by a tip linking
/// `changelog_url` when one is given.
///
/// Producing this is a successful build, not an error.
pub fn no_token_document(changelog_url: Option<&str>) -> Vec<DocumentNode> {
    let explanation = DocumentNode::paragraph(vec![
        DocumentNode::text(
            "Changelog was not built because no GitHub authentication token was found. \
             An access token can be provided using the ",
        ),
        DocumentNode::literal(TOKEN_ENV_VAR),
        DocumentNode::text(" environment variable or the "),
        DocumentNode::literal(TOKEN_PARAMETER),
        DocumentNode::text(" parameter in "),
        DocumentNode::literal(HOST_CONFIG_FILE),
        DocumentNode::text(
            ", or it can be automatically located from a configured git credential helper.",
        ),
    ]);

    let mut document = vec![DocumentNode::warning(vec![explanation])];

    if let Some(url) = changelog_url.filter(|url| !url.is_empty()) {
        document.push(DocumentNode::tip(vec![DocumentNode::paragraph(vec![
            DocumentNode::text("Find the project changelog "),
            DocumentNode::reference("here", url),
            DocumentNode::text("."),
        ])]));
    }

    document
}
