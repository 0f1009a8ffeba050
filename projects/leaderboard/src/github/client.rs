use async_trait::async_trait;
use interfaces_github_repos::index::{build_client, fetch_rest, BuildClientError, GitHubRestResult};
use reqwest::{Client, StatusCode};

use crate::{
    config::ApiConfig,
    github::{
        endpoint::{ApiResponse, Endpoint},
        error::ApiError,
        CommitRecord, RepositoryIdentifier, RepositoryRecord,
    },
};

/// The two lookups the aggregator needs. Implemented over HTTP by
/// [`GitHubClient`] and by stubs in tests.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    async fn fetch_repository(
        &self,
        id: &RepositoryIdentifier,
    ) -> Result<RepositoryRecord, ApiError>;

    async fn fetch_commit(&self, repo: &RepositoryRecord) -> Result<CommitRecord, ApiError>;
}

pub struct GitHubClient {
    http: Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    pub fn new(config: &ApiConfig) -> Result<Self, BuildClientError> {
        Ok(Self {
            http: build_client(config.timeout)?,
            api_base: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    async fn request(&self, endpoint: Endpoint<'_>) -> Result<ApiResponse, ApiError> {
        let url = endpoint.url(&self.api_base).map_err(|source| ApiError::Url {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let GitHubRestResult { body, status } = fetch_rest(&self.http, url, &self.token)
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if status != StatusCode::OK {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        endpoint.decode(&body).map_err(|source| ApiError::Mapping {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl RepositoryApi for GitHubClient {
    async fn fetch_repository(
        &self,
        id: &RepositoryIdentifier,
    ) -> Result<RepositoryRecord, ApiError> {
        let endpoint = Endpoint::Repository(id);
        match self.request(endpoint).await? {
            ApiResponse::Repository(record) => Ok(record),
            ApiResponse::Commit(_) => Err(ApiError::UnexpectedPayload {
                endpoint: endpoint.to_string(),
            }),
        }
    }

    async fn fetch_commit(&self, repo: &RepositoryRecord) -> Result<CommitRecord, ApiError> {
        let endpoint = Endpoint::latest_commit(repo);
        match self.request(endpoint).await? {
            ApiResponse::Commit(commit) => Ok(commit),
            ApiResponse::Repository(_) => Err(ApiError::UnexpectedPayload {
                endpoint: endpoint.to_string(),
            }),
        }
    }
}
