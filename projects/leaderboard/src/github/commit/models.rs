use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Wire format of `commit.committer.date`.
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub committer_name: String,
    pub committer_email: String,
    pub date: DateTime<Utc>,
}

/// Body of `GET /repos/{owner}/{name}/commits/{ref}`, reduced to the
/// committer block.
#[derive(Debug, Deserialize)]
pub struct CommitPayload {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    committer: Committer,
}

#[derive(Debug, Deserialize)]
struct Committer {
    name: String,
    email: String,
    #[serde(deserialize_with = "deserialize_commit_date")]
    date: DateTime<Utc>,
}

impl From<CommitPayload> for CommitRecord {
    fn from(payload: CommitPayload) -> Self {
        let Committer { name, email, date } = payload.commit.committer;
        Self {
            committer_name: name,
            committer_email: email,
            date,
        }
    }
}

fn deserialize_commit_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, COMMIT_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|err| serde::de::Error::custom(format!("cannot decode date string {raw}: {err}")))
}
