//! Corpus ingestion: directory crawling and link extraction

mod link_extractor;
mod scanner;

pub use link_extractor::extract_links;
pub use scanner::{scan_files, ScanOptions, ScanResult};

use crate::error::{LinkRankError, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Crawl a directory of HTML pages into a raw link mapping
///
/// Each scanned file becomes one page, keyed by its corpus-relative path,
/// with the set of href targets extracted from its markup. The mapping is
/// raw: targets may still include self-links or pages outside the corpus,
/// which [`crate::LinkGraph::from_raw`] drops during normalization.
pub fn crawl(dir: &Path) -> Result<HashMap<String, HashSet<String>>> {
    if !dir.is_dir() {
        return Err(LinkRankError::CorpusNotFound(dir.display().to_string()));
    }

    let mut raw = HashMap::new();

    for entry in scan_files(dir, &ScanOptions::default())? {
        let content = std::fs::read_to_string(&entry.path)?;
        let targets = extract_links(&content);
        debug!(page = %entry.relative_path, targets = targets.len(), "crawled page");
        raw.insert(entry.relative_path, targets);
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_crawl_keys_by_relative_path() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("1.html"),
            r#"<html><body><a href="2.html">two</a></body></html>"#,
        )
        .unwrap();
        fs::write(dir.path().join("2.html"), "<html><body>no links</body></html>").unwrap();

        let raw = crawl(dir.path()).unwrap();

        assert_eq!(raw.len(), 2);
        assert!(raw["1.html"].contains("2.html"));
        assert!(raw["2.html"].is_empty());
    }

    #[test]
    fn test_crawl_ignores_non_html_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("page.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("notes.txt"), "not markup").unwrap();

        let raw = crawl(dir.path()).unwrap();

        assert_eq!(raw.len(), 1);
        assert!(raw.contains_key("page.html"));
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let result = crawl(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(LinkRankError::CorpusNotFound(_))));
    }

    #[test]
    fn test_empty_directory_yields_empty_mapping() {
        let dir = TempDir::new().unwrap();
        let raw = crawl(dir.path()).unwrap();
        assert!(raw.is_empty());
    }
}
