//! Discovery of `*ImpactBuilder` classes in the queue processor sources.
//!
//! Extraction is deliberately narrow: a `class <Name>ImpactBuilder`
//! declaration and an `acceptedType ... = <Type>::class` assignment.
//! Files without the class declaration are skipped silently.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::relative_display;
use super::text::contains_lowercase;
use super::types::{BuilderResult, UNKNOWN_ACCEPTED_TYPE};

/// Directory holding the GL record builders, relative to the repository root.
pub const BUILDERS_DIR: &str = "queue-processor/src/main/kotlin/com/wealthsimple/oracleglpublisher/queueprocessor/glrecordbuilders";

const BUILDER_FILE_SUFFIX: &str = "ImpactBuilder.kt";

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+(\w+ImpactBuilder)").expect("valid class regex"));

static ACCEPTED_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)acceptedType.*?=\s*(\w+)::class").expect("valid accepted type regex")
});

/// Extracts builder metadata from Kotlin source.
///
/// Returns `None` when the file declares no `*ImpactBuilder` class.
pub fn parse_builder(content: &str) -> Option<(String, String)> {
    let name = CLASS_NAME.captures(content)?.get(1)?.as_str().to_string();
    let accepted_type = ACCEPTED_TYPE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_ACCEPTED_TYPE.to_string(), |m| m.as_str().to_string());
    Some((name, accepted_type))
}

/// Finds impact builders, optionally filtered by `query`.
///
/// The query matches the class name or anywhere in the file,
/// case-insensitively. Results are sorted by name; equal names keep
/// their directory-walk order.
pub fn find_builders(query: Option<&str>, root: &Path) -> Vec<BuilderResult> {
    let dir = root.join(BUILDERS_DIR);
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "builder directory missing");
        return Vec::new();
    }

    let needle = query.filter(|q| !q.is_empty()).map(str::to_lowercase);
    let mut results = Vec::new();

    let walker = WalkDir::new(&dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(BUILDER_FILE_SUFFIX))
        });

    for entry in walker {
        let path = entry.path();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable builder file");
                continue;
            }
        };

        let Some((name, accepted_type)) = parse_builder(&content) else {
            debug!(path = %path.display(), "no ImpactBuilder class declaration");
            continue;
        };

        if let Some(needle) = &needle
            && !contains_lowercase(&name, needle)
            && !contains_lowercase(&content, needle)
        {
            continue;
        }

        results.push(BuilderResult {
            name,
            file: relative_display(root, path),
            accepted_type,
        });
    }

    results.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(query = ?query, count = results.len(), "builder search finished");
    results
}
