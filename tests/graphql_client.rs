// tests/graphql_client.rs
//! The blocking GraphQL client against a mock server.
//!
//! The client is blocking, so each call runs on a `spawn_blocking` thread
//! while the mock server keeps serving on the test runtime.

use github_changelog::{
    ApiError, GitHubToken, GraphQlClient, GraphQlRequest, Release, ReleaseSource, RepoSlug,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token() -> GitHubToken {
    GitHubToken::new("xyz").unwrap()
}

async fn call(endpoint: String, query: &str) -> Result<Value, ApiError> {
    let request = GraphQlRequest::new(query);
    tokio::task::spawn_blocking(move || -> Result<Value, ApiError> {
        let client = GraphQlClient::new()?;
        client.call(&endpoint, &token(), &request)
    })
    .await
    .unwrap()
}

async fn fetch(endpoint: String) -> Result<Vec<Release>, ApiError> {
    tokio::task::spawn_blocking(move || -> Result<Vec<Release>, ApiError> {
        let client = GraphQlClient::new()?;
        let slug = RepoSlug::parse("a/b").unwrap();
        client.fetch_releases(&slug, &endpoint, &token())
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_call_sends_token_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "token xyz"))
        .and(body_json(json!({"query": "query { viewer { login } }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"viewer": {}}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = call(
        format!("{}/graphql", mock_server.uri()),
        "query { viewer { login } }",
    )
    .await
    .unwrap();

    assert_eq!(response, json!({"data": {"viewer": {}}}));
}

#[tokio::test]
async fn test_call_sends_a_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(
            "User-Agent",
            concat!("github-changelog/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    call(mock_server.uri(), "query { a }").await.unwrap();
}

#[tokio::test]
async fn test_graphql_errors_are_returned_as_data() {
    let mock_server = MockServer::start().await;
    let errors = json!({"errors": [{"message": "c"}]});

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(errors.clone()))
        .mount(&mock_server)
        .await;

    let response = call(mock_server.uri(), "query { a }").await.unwrap();

    assert_eq!(response, errors);
}

#[tokio::test]
async fn test_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("foo"))
        .mount(&mock_server)
        .await;

    let err = call(mock_server.uri(), "query { a }").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::UnexpectedStatus {
            status: 400,
            body: "foo".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unexpected GitHub API error status code: 400\nfoo");
}

#[tokio::test]
async fn test_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = call(format!("http://127.0.0.1:{}/graphql", port), "query { a }")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert!(err
        .to_string()
        .starts_with("Could not retrieve changelog from github: "));
}

#[tokio::test]
async fn test_fetch_releases() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"repository": {"releases": {"nodes": [
                {
                    "name": "A new hope",
                    "descriptionHTML": "<p>yay</p>",
                    "url": "https://example.com",
                    "tagName": "1.0.0",
                    "publishedAt": "2000-01-01T00:00:00Z",
                    "isDraft": false
                },
                null
            ]}}}
        })))
        .mount(&mock_server)
        .await;

    let releases = fetch(format!("{}/api/graphql", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].tag_name, "1.0.0");
    assert_eq!(releases[0].published_date(), "2000-01-01");

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let query = body["query"].as_str().unwrap();
    assert!(query.contains(r#"repository(owner: "a", name: "b")"#));
    assert!(query.contains("first:100"));
}

#[tokio::test]
async fn test_fetch_releases_rejects_non_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = fetch(mock_server.uri()).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
}
