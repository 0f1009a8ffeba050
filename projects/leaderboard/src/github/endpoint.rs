use std::fmt;

use url::Url;

use crate::github::{
    commit::models::{CommitPayload, CommitRecord},
    repository::models::{RepositoryIdentifier, RepositoryRecord},
};

/// The two REST routes the leaderboard reads.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    Repository(&'a RepositoryIdentifier),
    Commit { full_name: &'a str, branch: &'a str },
}

/// A decoded body; one variant per wire schema.
#[derive(Debug)]
pub enum ApiResponse {
    Repository(RepositoryRecord),
    Commit(CommitRecord),
}

impl<'a> Endpoint<'a> {
    pub fn latest_commit(repo: &'a RepositoryRecord) -> Self {
        Endpoint::Commit {
            full_name: &repo.full_name,
            branch: &repo.default_branch,
        }
    }

    /// Resolves the route against `api_base`, keeping any path prefix the
    /// base already carries. Each owner, name and branch lands in its own
    /// percent-encoded segment, so `#`, `?` and `%` in a branch stay in the
    /// path.
    pub fn url(&self, api_base: &str) -> Result<Url, url::ParseError> {
        let mut route = Url::parse(api_base)?;
        {
            let mut segments = route
                .path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty().push("repos");
            match self {
                Endpoint::Repository(id) => {
                    segments.extend(id.as_str().split('/'));
                }
                Endpoint::Commit { full_name, branch } => {
                    segments.extend(full_name.split('/')).push("commits").push(branch);
                }
            }
        }
        Ok(route)
    }

    pub fn decode(&self, body: &str) -> Result<ApiResponse, serde_json::Error> {
        match self {
            Endpoint::Repository(_) => serde_json::from_str::<RepositoryRecord>(body)
                .map(ApiResponse::Repository),
            Endpoint::Commit { .. } => serde_json::from_str::<CommitPayload>(body)
                .map(|payload| ApiResponse::Commit(payload.into())),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Repository(id) => write!(f, "repos/{id}"),
            Endpoint::Commit { full_name, branch } => {
                write!(f, "repos/{full_name}/commits/{branch}")
            }
        }
    }
}
