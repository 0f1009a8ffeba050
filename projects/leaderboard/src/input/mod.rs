use std::path::Path;

use tracing::{debug, info, warn};

use crate::github::RepositoryIdentifier;

pub const GITHUB_HOST_PREFIX: &str = "https://github.com/";

/// Reads the repository list at `path`.
///
/// A missing or unreadable list is logged and treated as empty.
pub async fn load_identifiers(path: &Path, host_prefix: &str) -> Vec<RepositoryIdentifier> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), %err, "repository list unreadable, treating as empty");
            return Vec::new();
        }
    };

    let identifiers = parse_identifiers(&text, host_prefix);
    info!(path = %path.display(), count = identifiers.len(), "loaded repository list");
    identifiers
}

/// Keeps lines that start with `host_prefix` and turns the remainder into
/// an identifier. Order and duplicates are preserved.
pub fn parse_identifiers(text: &str, host_prefix: &str) -> Vec<RepositoryIdentifier> {
    text.lines()
        .filter_map(|line| line.strip_prefix(host_prefix))
        .filter_map(|rest| {
            let full_name = rest.trim().trim_end_matches('/');
            if full_name.is_empty() {
                debug!("skipping bare host line");
                return None;
            }
            Some(RepositoryIdentifier::new(full_name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ids: &[RepositoryIdentifier]) -> Vec<&str> {
        ids.iter().map(RepositoryIdentifier::as_str).collect()
    }

    #[test]
    fn keeps_only_prefixed_lines() {
        let text = "\
# Swift web frameworks
https://github.com/vapor/vapor
  https://github.com/indented/ignored
http://github.com/plain/http
https://gitlab.com/other/host
https://github.com/Kitura/Kitura   
";
        let ids = parse_identifiers(text, GITHUB_HOST_PREFIX);
        assert_eq!(names(&ids), ["vapor/vapor", "Kitura/Kitura"]);
    }

    #[test]
    fn handles_crlf_trailing_slash_and_duplicates() {
        let text = "https://github.com/a/b\r\n\
                    https://github.com/c/d/\r\n\
                    https://github.com/a/b\r\n\
                    https://github.com/\r\n";
        let ids = parse_identifiers(text, GITHUB_HOST_PREFIX);
        assert_eq!(names(&ids), ["a/b", "c/d", "a/b"]);
    }

    #[test]
    fn custom_prefix() {
        let ids = parse_identifiers(
            "https://ghe.example.com/team/tool\nhttps://github.com/a/b",
            "https://ghe.example.com/",
        );
        assert_eq!(names(&ids), ["team/tool"]);
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ids = load_identifiers(&dir.path().join("list.txt"), GITHUB_HOST_PREFIX).await;
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "https://github.com/a/b\nnot a url\n").unwrap();

        let ids = load_identifiers(&path, GITHUB_HOST_PREFIX).await;
        assert_eq!(names(&ids), ["a/b"]);
    }
}
