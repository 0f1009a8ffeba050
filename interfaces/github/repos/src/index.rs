use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode, Url,
};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("projects-leaderboard/", env!("CARGO_PKG_VERSION"));

pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

/// Builds the client shared by every request of a run.
pub fn build_client(timeout: Duration) -> Result<Client, BuildClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|source| BuildClientError::ClientBuild { source })
}

/// GET `url`, sending `token` as a bearer credential when it is not empty.
pub async fn fetch_rest(
    client: &Client,
    url: Url,
    token: &str,
) -> Result<GitHubRestResult, FetchRestError> {
    debug!(%url, "GET");

    let mut request = client.get(url);
    if !token.is_empty() {
        request = request.header("Authorization", format!("Bearer {token}"));
    }

    let response = request
        .send()
        .await
        .map_err(|source| FetchRestError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchRestError::ResponseRead { source })?;

    Ok(GitHubRestResult { body, status })
}

#[derive(Debug, Error)]
pub enum BuildClientError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum FetchRestError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client() -> Client {
        build_client(Duration::from_secs(5)).expect("client should build")
    }

    #[tokio::test]
    async fn sends_bearer_token_and_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/a/b")
            .match_header("authorization", "Bearer secret")
            .match_header("accept", "application/vnd.github+json")
            .match_header("user-agent", Matcher::Regex("^projects-leaderboard/".into()))
            .with_status(200)
            .with_body(r#"{"name":"b"}"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/repos/a/b", server.url())).unwrap();
        let result = fetch_rest(&client(), url, "secret").await.unwrap();

        assert_eq!(result.status, StatusCode::OK);
        assert_eq!(result.body, r#"{"name":"b"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn omits_authorization_for_empty_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/a/b")
            .match_header("authorization", Matcher::Missing)
            .with_status(401)
            .with_body("{}")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/repos/a/b", server.url())).unwrap();
        let result = fetch_rest(&client(), url, "").await.unwrap();

        assert_eq!(result.status, StatusCode::UNAUTHORIZED);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_host_is_a_send_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let url = Url::parse("http://127.0.0.1:9/repos/a/b").unwrap();
        let err = fetch_rest(&client(), url, "").await.err().unwrap();

        assert!(matches!(err, FetchRestError::RequestSend { .. }));
    }
}
