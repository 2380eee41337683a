// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of where the changelog comes from and how it is linked.

// ---------------------------------------------------------------------------
// GitHub boundaries
// ---------------------------------------------------------------------------

/// Host of the public GitHub instance.
pub const GITHUB_PUBLIC_HOST: &str = "github.com";

/// Web root of the public GitHub instance, used when validating releases URLs.
pub const GITHUB_PUBLIC_ROOT: &str = "https://github.com/";

/// GraphQL endpoint of the public GitHub instance.
///
/// GitHub Enterprise servers expose theirs under `https://{host}/api/graphql`.
pub const GITHUB_PUBLIC_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// Path segment every releases page ends with.
pub const RELEASES_PATH_SUFFIX: &str = "/releases";

/// How many releases a single query asks for.
///
/// 100 is the GitHub GraphQL maximum for a connection page. Older releases
/// are not paginated.
pub const GITHUB_RELEASES_PAGE_SIZE: usize = 100;

// ---------------------------------------------------------------------------
// Package index
// ---------------------------------------------------------------------------

/// Prefix every PyPI project URL starts with.
pub const PYPI_PROJECT_PREFIX: &str = "https://pypi.org/project/";

// ---------------------------------------------------------------------------
// Configuration surface
// ---------------------------------------------------------------------------

/// Configuration parameter naming the API token.
pub const TOKEN_PARAMETER: &str = "sphinx_github_changelog_token";

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "SPHINX_GITHUB_CHANGELOG_TOKEN";

/// Environment variable holding the web root override.
pub const ROOT_REPO_ENV_VAR: &str = "SPHINX_GITHUB_CHANGELOG_ROOT_REPO";

/// Environment variable holding the GraphQL endpoint override.
pub const GRAPHQL_URL_ENV_VAR: &str = "SPHINX_GITHUB_CHANGELOG_GRAPHQL_URL";

/// File the host reads configuration parameters from.
pub const HOST_CONFIG_FILE: &str = "conf.py";

// ---------------------------------------------------------------------------
// Document output
// ---------------------------------------------------------------------------

/// Number of leading characters of `publishedAt` kept as the release date.
pub const RELEASE_DATE_LENGTH: usize = 10;

/// Prefix of every release section identifier.
pub const RELEASE_SECTION_ID_PREFIX: &str = "release-";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters of a subprocess's stderr kept in debug logs.
pub const SUBPROCESS_STDERR_PREVIEW_LENGTH: usize = 200;
