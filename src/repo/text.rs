//! Heuristics for pulling titles and excerpts out of Markdown.

/// Maximum excerpt length in characters, before the truncation marker.
pub const EXCERPT_LIMIT: usize = 200;

/// Appended to every excerpt.
pub const TRUNCATION_MARKER: &str = "...";

/// Returns the text of the first top-level (`# `) heading.
pub fn markdown_title(content: &str) -> Option<&str> {
    content.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let title = rest.trim();
        (!title.is_empty()).then_some(title)
    })
}

/// Builds a bounded excerpt of the body text.
///
/// Leading headings and blank lines are skipped. The remaining non-blank
/// lines are trimmed and joined with single spaces until the text grows
/// past `limit` characters, then cut to exactly `limit` characters and
/// suffixed with [`TRUNCATION_MARKER`].
pub fn excerpt(content: &str, limit: usize) -> String {
    let mut joined = String::new();
    let mut in_preamble = true;

    for line in content.lines() {
        let trimmed = line.trim();
        if in_preamble {
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            in_preamble = false;
        }
        if trimmed.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(trimmed);
        if joined.chars().count() > limit {
            break;
        }
    }

    let mut out: String = joined.chars().take(limit).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}

/// Case-insensitive substring test; `needle_lower` must already be lowercase.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
