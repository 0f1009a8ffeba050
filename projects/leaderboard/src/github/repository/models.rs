use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::github::commit::models::CommitRecord;

/// `owner/name`, as accepted by the `/repos/{owner}/{name}` routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentifier(String);

impl RepositoryIdentifier {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository metadata as returned by `GET /repos/{owner}/{name}`.
///
/// `last_commit` is never on the wire; it is filled in by the second
/// aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub default_branch: String,
    pub html_url: Url,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    #[serde(rename = "open_issues_count")]
    pub open_issues: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(skip)]
    pub last_commit: Option<CommitRecord>,
}

impl RepositoryRecord {
    pub fn attach_commit(&mut self, commit: CommitRecord) {
        self.last_commit = Some(commit);
    }

    /// A record is rendered only once its latest commit is known.
    pub fn is_eligible(&self) -> bool {
        self.last_commit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_renamed_wire_fields() {
        let body = json!({
            "id": 1,
            "name": "vapor",
            "full_name": "vapor/vapor",
            "default_branch": "main",
            "html_url": "https://github.com/vapor/vapor",
            "stargazers_count": 24000,
            "forks_count": 1400,
            "open_issues_count": 90,
            "description": "A server-side Swift HTTP web framework.",
            "private": false
        });

        let record: RepositoryRecord = serde_json::from_value(body).unwrap();

        assert_eq!(record.name, "vapor");
        assert_eq!(record.full_name, "vapor/vapor");
        assert_eq!(record.default_branch, "main");
        assert_eq!(record.html_url.as_str(), "https://github.com/vapor/vapor");
        assert_eq!(record.stars, 24000);
        assert_eq!(record.forks, 1400);
        assert_eq!(record.open_issues, 90);
        assert_eq!(
            record.description.as_deref(),
            Some("A server-side Swift HTTP web framework.")
        );
        assert!(!record.is_eligible());
    }

    #[test]
    fn null_description_is_none() {
        let body = json!({
            "name": "b",
            "full_name": "a/b",
            "default_branch": "master",
            "html_url": "https://github.com/a/b",
            "stargazers_count": 1,
            "forks_count": 0,
            "open_issues_count": 0,
            "description": null
        });

        let record: RepositoryRecord = serde_json::from_value(body).unwrap();
        assert_eq!(record.description, None);
    }

    #[test]
    fn negative_star_count_is_rejected() {
        let body = json!({
            "name": "b",
            "full_name": "a/b",
            "default_branch": "master",
            "html_url": "https://github.com/a/b",
            "stargazers_count": -1,
            "forks_count": 0,
            "open_issues_count": 0
        });

        assert!(serde_json::from_value::<RepositoryRecord>(body).is_err());
    }
}
