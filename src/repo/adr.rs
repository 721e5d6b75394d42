//! Keyword search over Architecture Decision Records in `docs/adr`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::text::{EXCERPT_LIMIT, contains_lowercase, excerpt, markdown_title};
use super::types::SearchResult;

/// ADR directory, relative to the repository root.
pub const ADR_DIR: &str = "docs/adr";

const ADR_INDEX: &str = "README.md";

/// Lists ADR documents in file-name order, skipping the directory index.
///
/// A missing directory yields an empty list.
pub fn list_adr_files(root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(root.join(ADR_DIR)) else {
        debug!(root = %root.display(), "no ADR directory");
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .filter(|path| path.file_name().is_some_and(|name| name != ADR_INDEX))
        .collect();
    files.sort();
    files
}

/// Searches ADR titles and bodies for `query`, case-insensitively.
///
/// With no query (or an empty one) every ADR is returned.
pub fn search_adrs(query: Option<&str>, root: &Path) -> Vec<SearchResult> {
    let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);
    let mut results = Vec::new();

    for path in list_adr_files(root) {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable ADR");
                continue;
            }
        };

        let file = file_name(&path);
        let title = markdown_title(&content).map_or_else(|| file_stem(&path), str::to_string);

        if let Some(needle) = &needle
            && !contains_lowercase(&title, needle)
            && !contains_lowercase(&content, needle)
        {
            continue;
        }

        results.push(SearchResult {
            path: format!("{ADR_DIR}/{file}"),
            file,
            title,
            excerpt: excerpt(&content, EXCERPT_LIMIT),
        });
    }

    debug!(query = ?query, count = results.len(), "ADR search finished");
    results
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
