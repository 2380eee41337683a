use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Changelog needs a Github releases URL ({prefix}:owner/:repo/releases). Received {received}")]
    ReleasesUrl { prefix: String, received: String },

    #[error(
        "Changelog needs a PyPI project URL (https://pypi.org/project/:project). Received {received}"
    )]
    PackageUrl { received: String },

    #[error("Invalid repository '{value}': {reason}")]
    RepositorySlug { value: String, reason: String },
}
