use interfaces_github_repos::index::FetchRestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Url,
    Server,
    Mapping,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("UrlError: {endpoint}: {source}")]
    Url {
        endpoint: String,
        source: url::ParseError,
    },

    #[error("ServerError: {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: FetchRestError,
    },

    #[error("ServerError: {endpoint} returned {status}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },

    #[error("MappingError: {endpoint}: {source}")]
    Mapping {
        endpoint: String,
        source: serde_json::Error,
    },

    #[error("MappingError: {endpoint} decoded to an unexpected payload")]
    UnexpectedPayload {
        endpoint: String,
    },
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Url { .. } => ApiErrorKind::Url,
            ApiError::Transport { .. } | ApiError::Status { .. } => ApiErrorKind::Server,
            ApiError::Mapping { .. } | ApiError::UnexpectedPayload { .. } => ApiErrorKind::Mapping,
        }
    }
}
