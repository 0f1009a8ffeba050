use chrono::Local;
use clap::Parser;
use interfaces_github_repos::index::BuildClientError;
use projects_leaderboard::{
    config::{Args, Config},
    github::GitHubClient,
    pipeline::run,
    render::RenderError,
};
use thiserror::Error;
use tracing::{error, info};
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("BuildClient: {source}")]
    BuildClient {
        #[source]
        source: BuildClientError,
    },
    #[error("WriteLeaderboard: {source}")]
    WriteLeaderboard {
        #[source]
        source: RenderError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    // .env must be loaded before clap reads its env fallbacks.
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_init(&args.log_level, args.log_json)
        .map_err(|source| MainError::TracingInit { source })?;

    let config = Config::from_args(args).await;
    info!(input = %config.input.display(), api = %config.api.base_url, "starting leaderboard run");

    let client = GitHubClient::new(&config.api)
        .map_err(|source| MainError::BuildClient { source })?;

    run(&client, &config, Local::now().naive_local())
        .await
        .map_err(|source| {
            error!("could not update leaderboard: {source}");
            MainError::WriteLeaderboard { source }
        })?;

    Ok(())
}
