//! Result types produced by repository queries.
//!
//! Every value here is a read-only view computed from the filesystem at
//! call time. Nothing is cached between calls.

use std::fmt;

use serde::Serialize;

/// Sentinel reported when a builder has no accepted-type declaration.
pub const UNKNOWN_ACCEPTED_TYPE: &str = "Unknown";

/// A single Architecture Decision Record hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// File name, e.g. `0007-idempotency-key-meaning.md`.
    pub file: String,
    /// First top-level heading, or the file stem when there is none.
    pub title: String,
    /// Bounded excerpt of the body text.
    pub excerpt: String,
    /// Path relative to the repository root.
    pub path: String,
}

/// An impact builder class discovered in the queue processor sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderResult {
    /// Declared class name, ending in `ImpactBuilder`.
    pub name: String,
    /// Path relative to the repository root.
    pub file: String,
    /// Accepted activity type, or [`UNKNOWN_ACCEPTED_TYPE`].
    pub accepted_type: String,
}

impl BuilderResult {
    /// Whether the accepted type could not be extracted.
    pub fn accepted_type_unknown(&self) -> bool {
        self.accepted_type == UNKNOWN_ACCEPTED_TYPE
    }
}

/// A matching line found by code search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeMatch {
    /// Path relative to the repository root.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// The matching line, whitespace-trimmed.
    #[serde(rename = "match")]
    pub matched: String,
    /// Up to two lines before and after the match, joined with `\n`.
    pub context: String,
}

/// Outcome of a schema reference lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaInfo {
    /// The reference document does not exist.
    MissingDocument,
    /// Table names found in the document, in document order.
    Overview(Vec<String>),
    /// Raw text of one table section, heading included.
    Section(String),
    /// No section matches the requested table.
    UnknownTable(String),
}

impl fmt::Display for SchemaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDocument => f.write_str("Schema reference documentation not found."),
            Self::Overview(tables) => {
                f.write_str("# Oracle GL Schema Tables\n\n")?;
                f.write_str("Available tables:\n")?;
                for table in tables {
                    writeln!(f, "- {table}")?;
                }
                f.write_str("\nUse get_schema_info with a specific table name for details.")
            }
            Self::Section(text) => f.write_str(text),
            Self::UnknownTable(table) => write!(
                f,
                "Table '{table}' not found in schema reference. Available tables: {}",
                super::schema::KNOWN_TABLES.join(", ")
            ),
        }
    }
}
