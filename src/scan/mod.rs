//! Directory scanning and per-file document parsing
//!
//! Thin plumbing around the extraction core: enumerates manifests, parses
//! them into generic YAML trees, and funnels every candidate through the
//! aggregator.

pub mod discovery;

use crate::aggregate::{Aggregator, DiscoveredFqdn};
use crate::extract;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal scan errors. Per-file read and parse failures are not errors;
/// they are logged and the file contributes nothing.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root does not exist: {0:?}")]
    RootNotFound(PathBuf),

    #[error("Scan root is not a directory: {0:?}")]
    RootNotDirectory(PathBuf),
}

/// Counters reported at the end of a run
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanStats {
    /// Files read and parsed (including partially parsed ones)
    pub files_scanned: usize,
    /// Files excluded by the templates filter
    pub files_skipped: usize,
    /// Files that could not be read
    pub files_failed: usize,
    /// Candidates seen before deduplication
    pub candidates: usize,
}

/// Result of a run: deduplicated, sorted discoveries plus counters
#[derive(Debug)]
pub struct ScanOutcome {
    pub discovered: Vec<DiscoveredFqdn>,
    pub stats: ScanStats,
}

/// One extraction run over a directory tree
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk every manifest under the root and collect monitored hostnames.
    ///
    /// Only a missing root aborts the run; partial results from files
    /// processed before any later failure are always preserved.
    pub fn run(&self) -> Result<ScanOutcome, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::RootNotDirectory(self.root.clone()));
        }

        let files = discovery::list_yaml_files(&self.root);
        tracing::info!("Found {} YAML file(s) under {:?}", files.len(), self.root);

        let mut aggregator = Aggregator::new();
        let mut stats = ScanStats::default();

        for path in &files {
            if discovery::is_template_path(path) {
                tracing::debug!("Skipping template file: {:?}", path);
                stats.files_skipped += 1;
                continue;
            }

            tracing::debug!("Scanning file: {:?}", path);
            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Failed to read {:?}: {}", path, e);
                    stats.files_failed += 1;
                    continue;
                }
            };

            stats.files_scanned += 1;
            let source_file = path.to_string_lossy().into_owned();
            let app_name = app_name_for(&self.root, path);

            for document in parse_documents(&content, path) {
                for candidate in extract::walk(&document, "$") {
                    tracing::debug!(
                        "Candidate {} ({:?}) at {}",
                        candidate.fqdn,
                        candidate.origin,
                        candidate.path_hint
                    );
                    stats.candidates += 1;
                    aggregator.record(&candidate.fqdn, &source_file, &app_name);
                }
            }
        }

        let discovered = aggregator.into_sorted();
        tracing::info!(
            "Scan complete: {} candidate(s), {} unique fqdn(s) across {} file(s)",
            stats.candidates,
            discovered.len(),
            stats.files_scanned
        );

        Ok(ScanOutcome { discovered, stats })
    }
}

/// Parse a possibly multi-document YAML file into generic trees.
///
/// Documents are consumed lazily; a malformed document logs a warning and
/// aborts the rest of that file, keeping whatever parsed before it. Empty
/// documents are skipped.
pub fn parse_documents(content: &str, path: &Path) -> Vec<Value> {
    let mut documents = Vec::new();

    for deserializer in serde_yaml::Deserializer::from_str(content) {
        match Value::deserialize(deserializer) {
            Ok(Value::Null) => {}
            Ok(document) => documents.push(document),
            Err(e) => {
                tracing::warn!("Failed to parse {:?}: {}", path, e);
                break;
            }
        }
    }

    documents
}

/// Application owning a manifest: the directory immediately inside the scan
/// root, or `"unknown"` for paths too shallow to have one.
pub fn app_name_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut components = relative.components();
    match (components.next(), components.next()) {
        (Some(app), Some(_)) => app.as_os_str().to_string_lossy().into_owned(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name_is_first_directory_under_root() {
        let root = Path::new("system");
        assert_eq!(
            app_name_for(root, Path::new("system/app1/cert.yaml")),
            "app1"
        );
        assert_eq!(
            app_name_for(root, Path::new("system/app2/sub/deep.yaml")),
            "app2"
        );
    }

    #[test]
    fn test_app_name_unknown_for_shallow_paths() {
        let root = Path::new("system");
        assert_eq!(app_name_for(root, Path::new("system/top.yaml")), "unknown");
    }

    #[test]
    fn test_parse_multi_document_file() {
        let content = "host: a.corp.io\n---\nhost: b.corp.io\n";
        let documents = parse_documents(content, Path::new("multi.yaml"));
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_parse_skips_empty_documents() {
        let content = "---\n---\nhost: a.corp.io\n";
        let documents = parse_documents(content, Path::new("gaps.yaml"));
        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_parse_keeps_documents_before_a_malformed_one() {
        let content = "host: a.corp.io\n---\n{ not: valid: yaml\n";
        let documents = parse_documents(content, Path::new("broken.yaml"));
        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let scanner = Scanner::new("/nonexistent/scan/root");
        let result = scanner.run();
        assert!(matches!(result, Err(ScanError::RootNotFound(_))));
    }
}
