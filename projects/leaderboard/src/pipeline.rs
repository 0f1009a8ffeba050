use chrono::NaiveDateTime;
use tracing::info;

use crate::{
    aggregate::{aggregate, AggregateSummary},
    config::Config,
    github::RepositoryApi,
    input::load_identifiers,
    render::{render_lines, write_leaderboard, RenderError},
};

/// Load, fetch, rank and write. Only an output failure is returned;
/// per-repository failures are logged by the aggregator and skipped.
pub async fn run<A>(
    api: &A,
    config: &Config,
    generated_at: NaiveDateTime,
) -> Result<AggregateSummary, RenderError>
where
    A: RepositoryApi + ?Sized,
{
    let identifiers = load_identifiers(&config.input, &config.host_prefix).await;
    let (records, summary) = aggregate(api, &identifiers).await;

    let lines = render_lines(&records, &config.header, generated_at);
    write_leaderboard(&config.output, &lines).await?;

    info!(
        output = %config.output.display(),
        requested = summary.requested,
        repositories = summary.repositories,
        ranked = summary.commits,
        "leaderboard written"
    );

    Ok(summary)
}
