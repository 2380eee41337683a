// src/api/parser.rs
//! Unpacks the release list from a decoded GraphQL response.

use crate::error::ApiError;
use crate::model::Release;
use serde::Deserialize;
use serde_json::Value;

/// Extracts `data.repository.releases.nodes` from a GraphQL response.
///
/// GraphQL-level `errors` win over any data. Any other deviation from the
/// expected shape, including `data.repository` being null because the
/// repository does not exist or is not visible, is a single
/// [`ApiError::UnexpectedFormat`] carrying the whole response.
///
/// Null nodes are dropped: GitHub returns them for releases the token may
/// not see (private drafts). The order of the rest is kept.
pub fn extract_releases(response: &Value) -> Result<Vec<Release>, ApiError> {
    if let Some(errors) = response.get("errors").filter(|errors| !errors.is_null()) {
        let messages = match errors.as_array() {
            Some(items) => items.iter().map(error_message).collect(),
            None => vec![error_message(errors)],
        };
        return Err(ApiError::GraphQl { messages });
    }

    let unexpected_format = || ApiError::UnexpectedFormat {
        raw: response.to_string(),
    };

    let nodes = response
        .pointer("/data/repository/releases/nodes")
        .and_then(Value::as_array)
        .ok_or_else(unexpected_format)?;

    let releases = nodes
        .iter()
        .filter(|node| !node.is_null())
        .map(|node| Release::deserialize(node).map_err(|_| unexpected_format()))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Received {} release nodes, {} hidden",
        nodes.len(),
        nodes.len() - releases.len()
    );

    Ok(releases)
}

/// The `message` of a GraphQL error, or the whole error when it has none.
fn error_message(error: &Value) -> String {
    match error.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => error.to_string(),
    }
}
