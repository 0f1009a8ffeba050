//! Command-line arguments and the resolved run configuration.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use tracing::{debug, warn};

use crate::{
    input::GITHUB_HOST_PREFIX,
    render::{Header, DEFAULT_SUMMARY, DEFAULT_TITLE},
};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Ranks GitHub repositories by stars and writes a markdown table.
#[derive(Debug, Parser)]
#[command(name = "projects_leaderboard")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Repository list, one `https://github.com/owner/name` per line
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "list.txt",
        env = "LEADERBOARD_INPUT"
    )]
    pub input: PathBuf,

    /// Markdown file to overwrite
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "README.md",
        env = "LEADERBOARD_OUTPUT"
    )]
    pub output: PathBuf,

    /// GitHub access token; takes precedence over `--token-file`
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// File whose trimmed contents are used as the access token
    #[arg(
        long,
        value_name = "FILE",
        default_value = "access_token.txt",
        env = "LEADERBOARD_TOKEN_FILE"
    )]
    pub token_file: PathBuf,

    /// REST API root
    #[arg(long, default_value = DEFAULT_API_BASE, env = "LEADERBOARD_API_BASE")]
    pub api_base: String,

    /// Only lines starting with this prefix are read from the list
    #[arg(long, default_value = GITHUB_HOST_PREFIX, env = "LEADERBOARD_HOST_PREFIX")]
    pub host_prefix: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, env = "LEADERBOARD_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Title line of the generated document
    #[arg(long, default_value = DEFAULT_TITLE, env = "LEADERBOARD_TITLE")]
    pub title: String,

    /// Text between the title and the table
    #[arg(long, default_value = DEFAULT_SUMMARY, env = "LEADERBOARD_SUMMARY")]
    pub summary: String,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info", env = "LEADERBOARD_LOG")]
    pub log_level: String,

    /// Output logs as JSON
    #[arg(long, default_value = "false", env = "LEADERBOARD_LOG_JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub host_prefix: String,
    pub header: Header,
    pub api: ApiConfig,
}

impl Config {
    pub async fn from_args(args: Args) -> Self {
        let token = resolve_token(args.token.as_deref(), &args.token_file).await;

        Self {
            input: args.input,
            output: args.output,
            host_prefix: args.host_prefix,
            header: Header {
                title: args.title,
                summary: args.summary,
            },
            api: ApiConfig {
                base_url: args.api_base,
                token,
                timeout: Duration::from_secs(args.timeout_secs),
            },
        }
    }
}

/// Explicit token first, then the token file, then empty.
///
/// An empty token is not an error: requests go out unauthenticated and any
/// rejection is reported per repository.
pub async fn resolve_token(explicit: Option<&str>, token_file: &Path) -> String {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using token from --token/GITHUB_TOKEN");
        return token.to_string();
    }

    match tokio::fs::read_to_string(token_file).await {
        Ok(contents) => {
            debug!(path = %token_file.display(), "using token file");
            contents.trim().to_string()
        }
        Err(err) => {
            warn!(
                path = %token_file.display(),
                %err,
                "no access token, requests are unauthenticated"
            );
            String::new()
        }
    }
}
