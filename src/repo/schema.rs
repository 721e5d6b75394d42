//! Section lookup in the Oracle GL schema reference document.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::SchemaInfo;

/// Schema reference document, relative to the repository root.
pub const SCHEMA_DOC: &str = "docs/oracle-gl-schema-reference.md";

/// Tables listed when a lookup misses.
pub const KNOWN_TABLES: [&str; 5] = [
    "GL_INTERFACE",
    "GL_JE_BATCHES",
    "GL_JE_HEADERS",
    "GL_JE_LINES",
    "GL_CODE_COMBINATIONS",
];

const SECTION_PREFIX: &str = "## ";
const TABLE_PREFIX: &str = "GL_";

/// Returns the table name declared by a `## GL_<word>` heading line.
fn table_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(SECTION_PREFIX)?;
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..end];
    (name.starts_with(TABLE_PREFIX) && name.len() > TABLE_PREFIX.len()).then_some(name)
}

/// Lists table names in document order.
pub fn table_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(table_heading)
        .map(str::to_string)
        .collect()
}

/// Extracts the section for `table`, from its heading up to the next
/// `## ` heading or end of document.
pub fn table_section<'a>(content: &'a str, table: &str) -> Option<&'a str> {
    let wanted = table.to_uppercase();
    let mut start = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        match start {
            None if table_heading(line).is_some_and(|name| name == wanted) => {
                start = Some(offset);
            }
            Some(begin) if line.starts_with(SECTION_PREFIX) => {
                return Some(&content[begin..offset]);
            }
            _ => {}
        }
        offset += line.len();
    }

    start.map(|begin| &content[begin..])
}

/// Looks up a table section, or an overview of all tables when `table`
/// is absent or empty.
pub fn get_schema_info(table: Option<&str>, root: &Path) -> SchemaInfo {
    let Ok(content) = fs::read_to_string(root.join(SCHEMA_DOC)) else {
        debug!(root = %root.display(), "schema reference missing");
        return SchemaInfo::MissingDocument;
    };

    match table.map(str::trim).filter(|t| !t.is_empty()) {
        None => SchemaInfo::Overview(table_names(&content)),
        Some(table) => table_section(&content, table).map_or_else(
            || SchemaInfo::UnknownTable(table.to_string()),
            |section| SchemaInfo::Section(section.to_string()),
        ),
    }
}
