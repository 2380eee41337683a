// src/error.rs
//! Application error types with structured error handling.
//!
//! Every failure a changelog build can hit is one [`ChangelogError`]. The
//! host renders it as a build-time failure with its message, so the
//! `Display` output of each variant is the user-facing text.
//!
//! Not finding an API token is deliberately absent here: it produces a
//! warning document instead of an error.

use crate::constants::GITHUB_PUBLIC_ROOT;
use thiserror::Error;

/// Failures while talking to the GitHub GraphQL API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The response carried a GraphQL `errors` array.
    #[error("GitHub API error response: \n{}", messages.join("\n"))]
    GraphQl { messages: Vec<String> },

    /// HTTP status outside 2xx. GraphQL answers 200 even for query errors,
    /// so this means the endpoint itself refused the request.
    #[error("Unexpected GitHub API error status code: {status}\n{body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection, TLS...).
    #[error("Could not retrieve changelog from github: {cause}")]
    Transport { cause: String },

    /// The response did not have the `data.repository.releases.nodes` shape.
    /// This is also what a missing repository or missing access looks like.
    #[error("GitHub API error unexpected format:\n{raw}")]
    UnexpectedFormat { raw: String },

    #[error("Could not build the HTTP client: {cause}")]
    Client { cause: String },
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error(
        "No :github: release URL provided and unable to determine it from git remotes. \
         Please provide a GitHub release URL in the format ({}:owner/:repo/releases)",
        GITHUB_PUBLIC_ROOT
    )]
    RepositoryNotConfigured,

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize the changelog: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },
}

impl ChangelogError {
    /// Short machine-friendly name of the error category.
    pub fn category(&self) -> &'static str {
        match self {
            Self::RepositoryNotConfigured => "config",
            Self::Validation(_) => "validation",
            Self::Api(_) => "api",
            Self::Io(_) | Self::Serialization(_) | Self::DeliveryFailed { .. } => "output",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            cause: err.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = ChangelogError> = std::result::Result<T, E>;
