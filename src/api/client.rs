// src/api/client.rs
//! Blocking HTTP client for the GitHub GraphQL API.
//!
//! This module provides a thin wrapper around reqwest for sending one
//! authenticated GraphQL POST. It translates transport failures and non-2xx
//! statuses into [`ApiError`] and returns the decoded JSON untouched.

use super::parser::extract_releases;
use super::query::{releases_query, GraphQlRequest};
use super::ReleaseSource;
use crate::error::ApiError;
use crate::model::Release;
use crate::types::{GitHubToken, RepoSlug};
use reqwest::blocking::Client;
use reqwest::header;
use serde_json::Value;

/// GitHub rejects API requests without a user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A thin wrapper around the reqwest blocking client for GraphQL requests.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: Client,
}

impl GraphQlClient {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Client {
                cause: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// POSTs `request` to `endpoint` and returns the decoded JSON body.
    ///
    /// No schema validation happens here; a GraphQL `errors` payload is a
    /// successful call at this layer.
    pub fn call(
        &self,
        endpoint: &str,
        token: &GitHubToken,
        request: &GraphQlRequest,
    ) -> Result<Value, ApiError> {
        log::info!("POST {}", endpoint);

        let response = self
            .client
            .post(endpoint)
            .header(header::AUTHORIZATION, format!("token {}", token.expose()))
            .json(request)
            .send()?;

        let status = response.status();
        log::debug!("{} answered {}", endpoint, status);

        if !status.is_success() {
            let body = response.text().unwrap_or_else(|e| {
                log::debug!("Could not read the {} response body: {}", status, e);
                String::new()
            });
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>()?)
    }
}

impl ReleaseSource for GraphQlClient {
    fn fetch_releases(
        &self,
        slug: &RepoSlug,
        endpoint: &str,
        token: &GitHubToken,
    ) -> Result<Vec<Release>, ApiError> {
        let request = GraphQlRequest::new(releases_query(slug));
        let response = self.call(endpoint, token, &request)?;
        extract_releases(&response)
    }
}
