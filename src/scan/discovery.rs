//! YAML file discovery under the scan root

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect `*.yaml` / `*.yml` files under `root`.
///
/// Entries are sorted by file name at every directory level so the
/// enumeration order is deterministic across platforms — first-wins
/// deduplication downstream depends on it.
pub fn list_yaml_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read directory entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => files.push(path.to_path_buf()),
            _ => {}
        }
    }

    files
}

/// Whether a path has a `templates` segment.
///
/// Helm template files carry unresolved templating syntax that breaks
/// generic YAML parsing; they are excluded before parsing.
pub fn is_template_path(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "templates")
}
