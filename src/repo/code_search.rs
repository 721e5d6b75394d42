//! Line-oriented, case-insensitive text search across the repository.
//!
//! Files are visited depth-first with directory entries sorted by file
//! name, so results are deterministic for an unchanged tree. Scanning
//! stops as soon as `max_results` matches have been collected.
//!
//! Unreadable or non-UTF-8 files are skipped: a broad scan favours
//! partial results over failing.

use std::fs;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::SearchError;

use super::relative_display;
use super::types::CodeMatch;

/// Default number of matches returned per call.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Extensions searched when no file pattern is given.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["kt", "java", "md"];

/// Directory names never descended into.
pub const EXCLUDED_DIRS: [&str; 3] = ["target", "build", ".git"];

/// Lines of context captured on each side of a match.
const CONTEXT_LINES: usize = 2;

/// Upper bounds on the work a single search may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Maximum number of candidate files read.
    pub max_files: usize,
    /// Files larger than this are skipped.
    pub max_file_bytes: u64,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_files: 20_000,
            max_file_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Which files a search visits.
enum FileFilter {
    Extensions,
    Glob(GlobMatcher),
}

impl FileFilter {
    fn new(file_pattern: Option<&str>) -> Result<Self, SearchError> {
        let Some(pattern) = file_pattern.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(Self::Extensions);
        };
        // Like a recursive glob: the pattern may match at any depth.
        let glob = GlobBuilder::new(&format!("**/{pattern}"))
            .literal_separator(true)
            .build()
            .map_err(|e| SearchError::InvalidFilePattern {
                pattern: pattern.to_string(),
                reason: e.kind().to_string(),
            })?;
        Ok(Self::Glob(glob.compile_matcher()))
    }

    fn accepts(&self, relative: &Path) -> bool {
        match self {
            Self::Extensions => relative
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| DEFAULT_EXTENSIONS.contains(&ext)),
            Self::Glob(matcher) => matcher.is_match(relative),
        }
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Searches with the default [`ScanLimits`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidFilePattern`] when `file_pattern` is not
/// a valid glob.
pub fn search_code(
    pattern: &str,
    root: &Path,
    file_pattern: Option<&str>,
    max_results: usize,
) -> Result<Vec<CodeMatch>, SearchError> {
    search_code_with_limits(pattern, root, file_pattern, max_results, ScanLimits::default())
}

/// Searches for `pattern` in every selected file under `root`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidFilePattern`] when `file_pattern` is not
/// a valid glob.
pub fn search_code_with_limits(
    pattern: &str,
    root: &Path,
    file_pattern: Option<&str>,
    max_results: usize,
    limits: ScanLimits,
) -> Result<Vec<CodeMatch>, SearchError> {
    let filter = FileFilter::new(file_pattern)?;
    let needle = pattern.to_lowercase();
    let mut results = Vec::new();
    let mut files_read = 0usize;

    if max_results == 0 {
        return Ok(results);
    }

    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file());

    for entry in entries {
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if !filter.accepts(relative) {
            continue;
        }

        if files_read >= limits.max_files {
            warn!(max_files = limits.max_files, "code search file limit reached");
            break;
        }
        if entry
            .metadata()
            .is_ok_and(|meta| meta.len() > limits.max_file_bytes)
        {
            debug!(path = %relative.display(), "skipping oversized file");
            continue;
        }
        files_read += 1;

        let Some(content) = read_text(entry.path()) else {
            continue;
        };

        let file = relative_display(root, entry.path());
        let lines: Vec<&str> = content.split('\n').collect();
        for (idx, line) in lines.iter().enumerate() {
            if !line.to_lowercase().contains(&needle) {
                continue;
            }
            let start = idx.saturating_sub(CONTEXT_LINES);
            let end = (idx + CONTEXT_LINES + 1).min(lines.len());
            results.push(CodeMatch {
                file: file.clone(),
                line: idx + 1,
                matched: line.trim().to_string(),
                context: lines[start..end].join("\n"),
            });
            if results.len() >= max_results {
                debug!(pattern, files_read, "code search hit result cap");
                return Ok(results);
            }
        }
    }

    debug!(pattern, files_read, count = results.len(), "code search finished");
    Ok(results)
}

/// Reads a file as UTF-8, or `None` when it cannot be read or decoded.
fn read_text(path: &Path) -> Option<String> {
    let bytes = fs::read(path)
        .inspect_err(|e| debug!(path = %path.display(), error = %e, "skipping unreadable file"))
        .ok()?;
    String::from_utf8(bytes)
        .inspect_err(|_| debug!(path = %path.display(), "skipping non-UTF-8 file"))
        .ok()
}
