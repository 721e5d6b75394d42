//! Text rendering of query results for LLM consumption.
//!
//! Every tool answers with a single Markdown text block: a header line
//! followed by one item per result.

use std::fmt::Write as _;

use crate::repo::{BuilderResult, CodeMatch, SearchResult};

/// Renders an operational fault as tool output.
pub fn format_error(message: impl std::fmt::Display) -> String {
    format!("Error: {message}")
}

/// Formats ADR search hits.
pub fn format_adr_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No ADRs found matching your query.".to_string();
    }

    let mut out = format!("Found {} ADR(s):\n\n", results.len());
    for result in results {
        let _ = writeln!(out, "**{}**: {}", result.file, result.title);
        let _ = writeln!(out, "{}", result.excerpt);
        let _ = writeln!(out, "Path: `{}`\n", result.path);
    }
    out
}

/// Formats the contents of a file read.
pub fn format_file(path: &str, content: &str) -> String {
    format!("# {path}\n\n```\n{content}\n```")
}

/// Formats impact builder results.
pub fn format_builders(results: &[BuilderResult], query: Option<&str>) -> String {
    if results.is_empty() {
        return match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("No Impact Builders found matching '{q}'."),
            None => "No Impact Builders found.".to_string(),
        };
    }

    let mut out = format!("Found {} Impact Builder(s):\n\n", results.len());
    for builder in results {
        let _ = writeln!(
            out,
            "- **{}** (accepts `{}`)\n  Path: `{}`",
            builder.name, builder.accepted_type, builder.file
        );
    }
    out
}

/// Formats code search matches with their context windows.
pub fn format_code_matches(pattern: &str, matches: &[CodeMatch]) -> String {
    if matches.is_empty() {
        return format!("No matches found for '{pattern}'.");
    }

    let mut out = format!("Found {} match(es) for '{pattern}':\n\n", matches.len());
    for m in matches {
        let _ = writeln!(out, "**{}:{}**: `{}`", m.file, m.line, m.matched);
        let _ = writeln!(out, "```\n{}\n```\n", m.context);
    }
    out
}
