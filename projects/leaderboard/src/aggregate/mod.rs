use tracing::{debug, warn};

use crate::github::{RepositoryApi, RepositoryIdentifier, RepositoryRecord};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    pub requested: usize,
    pub repositories: usize,
    pub commits: usize,
}

/// Fetches metadata for every identifier, then the latest commit for every
/// repository that was found. Requests run one at a time, in input order.
///
/// Failures are logged and skipped: a failed metadata fetch drops the
/// identifier, a failed commit fetch leaves `last_commit` unset.
pub async fn aggregate<A>(
    api: &A,
    identifiers: &[RepositoryIdentifier],
) -> (Vec<RepositoryRecord>, AggregateSummary)
where
    A: RepositoryApi + ?Sized,
{
    let mut records = Vec::with_capacity(identifiers.len());

    for id in identifiers {
        match api.fetch_repository(id).await {
            Ok(record) => {
                debug!(repo = %id, stars = record.stars, "fetched repository");
                records.push(record);
            }
            Err(err) => warn!(repo = %id, kind = ?err.kind(), "{err}"),
        }
    }

    let mut commits = 0;
    for record in records.iter_mut() {
        match api.fetch_commit(record).await {
            Ok(commit) => {
                record.attach_commit(commit);
                commits += 1;
            }
            Err(err) => warn!(repo = %record.full_name, kind = ?err.kind(), "{err}"),
        }
    }

    let summary = AggregateSummary {
        requested: identifiers.len(),
        repositories: records.len(),
        commits,
    };
    (records, summary)
}
