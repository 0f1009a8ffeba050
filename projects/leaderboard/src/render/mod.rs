use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::github::RepositoryRecord;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_TITLE: &str = "Top GitHub Repositories";
pub const DEFAULT_SUMMARY: &str =
    "A list of popular github projects (ranked by stars automatically)\n\
Please update **list.txt** (via Pull Request)";

const TABLE_HEADER: &str =
    "| Project Name | Stars | Forks | Open Issues | Description | Last Commit |";
const TABLE_RULE: &str =
    "| ------------ | ----- | ----- | ----------- | ----------- | ----------- |";
const LAST_UPDATE_LABEL: &str = "*Last Automatic Update: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub summary: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            summary: DEFAULT_SUMMARY.to_string(),
        }
    }
}

/// Builds the document line by line.
///
/// Rows are ordered by stars, highest first; equal counts keep their fetch
/// order. Records without a commit are skipped.
pub fn render_lines(
    records: &[RepositoryRecord],
    header: &Header,
    generated_at: NaiveDateTime,
) -> Vec<String> {
    let mut ranked: Vec<&RepositoryRecord> = records.iter().filter(|r| r.is_eligible()).collect();
    ranked.sort_by(|a, b| b.stars.cmp(&a.stars));

    let mut lines = vec![format!("# {}", header.title)];
    lines.extend(header.summary.lines().map(str::to_string));
    lines.push(String::new());
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_RULE.to_string());
    lines.extend(ranked.into_iter().filter_map(render_row));
    lines.push(String::new());
    lines.push(format!(
        "{LAST_UPDATE_LABEL}{}*",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    lines
}

fn render_row(record: &RepositoryRecord) -> Option<String> {
    let commit = record.last_commit.as_ref()?;
    Some(format!(
        "| [{}]({}) | {} | {} | {} | {} | {} |",
        escape_cell(&record.name),
        record.html_url,
        record.stars,
        record.forks,
        record.open_issues,
        escape_cell(record.description.as_deref().unwrap_or_default()),
        commit.date.format(TIMESTAMP_FORMAT),
    ))
}

/// Keeps free text inside its table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// Truncates `path` and writes `lines`, one write per line.
///
/// A failure stops the write; lines already written stay on disk.
pub async fn write_leaderboard(path: &Path, lines: &[String]) -> Result<(), RenderError> {
    let mut file = File::create(path)
        .await
        .map_err(|source| RenderError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, line) in lines.iter().enumerate() {
        file.write_all(format!("{line}\n").as_bytes())
            .await
            .map_err(|source| RenderError::WriteLine {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            })?;
    }

    file.flush()
        .await
        .map_err(|source| RenderError::Flush {
            path: path.to_path_buf(),
            source,
        })
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CreateFile: {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("WriteLine: {}:{line}: {source}", .path.display())]
    WriteLine {
        path: PathBuf,
        line: usize,
        source: std::io::Error,
    },

    #[error("Flush: {}: {source}", .path.display())]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}
