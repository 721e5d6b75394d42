//! MCP tool definitions for repository queries.
//!
//! Each parameter struct doubles as the tool's JSON input schema (via
//! `schemars`) and as the typed payload of a [`ToolRequest`].
//!
//! # Available Tools
//!
//! - `search_adrs` - Keyword search over Architecture Decision Records
//! - `read_file` - Read one file from the repository
//! - `find_impact_builders` - List `*ImpactBuilder` classes and their accepted types
//! - `get_schema_info` - Oracle GL schema reference lookup
//! - `search_code` - Case-insensitive text search with context lines

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::repo::code_search::DEFAULT_MAX_RESULTS;

/// Names of every registered tool, in advertised order.
pub const TOOL_NAMES: [&str; 5] = [
    "search_adrs",
    "read_file",
    "find_impact_builders",
    "get_schema_info",
    "search_code",
];

/// Largest `max_results` a caller may request from `search_code`.
pub const MAX_SEARCH_RESULTS: usize = 200;

/// Parameters for the `search_adrs` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchAdrsParams {
    /// Keyword to look for in ADR titles and bodies.
    #[schemars(description = "Search query (case insensitive)")]
    pub query: String,
}

/// Parameters for the `read_file` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReadFileParams {
    /// Path relative to the repository root.
    #[schemars(description = "Relative path from repo root")]
    pub path: String,
}

/// Parameters for the `find_impact_builders` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FindImpactBuildersParams {
    /// Optional filter on class name or file content.
    #[serde(default)]
    #[schemars(description = "Optional search term")]
    pub query: Option<String>,
}

/// Parameters for the `get_schema_info` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetSchemaInfoParams {
    /// Table to describe; omitted for an overview.
    #[serde(default)]
    #[schemars(description = "Table name (GL_INTERFACE, GL_JE_BATCHES, etc.)")]
    pub table: Option<String>,
}

/// Parameters for the `search_code` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchCodeParams {
    /// Text to search for.
    #[schemars(description = "Search pattern or keyword")]
    pub pattern: String,
    /// Optional glob restricting which files are searched.
    #[serde(default)]
    #[schemars(description = "Optional file pattern (e.g., '*.kt')")]
    pub file_pattern: Option<String>,
    /// Maximum number of matches to return.
    #[serde(default)]
    #[schemars(description = "Maximum number of matches to return (default: 20, max: 200)")]
    pub max_results: Option<u32>,
}

impl SearchCodeParams {
    /// Requested result cap, defaulted and clamped to `1..=MAX_SEARCH_RESULTS`.
    pub fn result_limit(&self) -> usize {
        self.max_results
            .map_or(DEFAULT_MAX_RESULTS, |n| n as usize)
            .clamp(1, MAX_SEARCH_RESULTS)
    }
}

/// A validated tool call: one variant per registered tool.
#[derive(Debug, Clone)]
pub enum ToolRequest {
    /// `search_adrs`
    SearchAdrs(SearchAdrsParams),
    /// `read_file`
    ReadFile(ReadFileParams),
    /// `find_impact_builders`
    FindImpactBuilders(FindImpactBuildersParams),
    /// `get_schema_info`
    GetSchemaInfo(GetSchemaInfoParams),
    /// `search_code`
    SearchCode(SearchCodeParams),
}

impl ToolRequest {
    /// Validates a raw tool call against the registered tools.
    ///
    /// Missing arguments are treated as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownTool`] for unregistered names and
    /// [`DispatchError::InvalidArguments`] when required fields are missing,
    /// unknown fields are present, or a field has the wrong type.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, DispatchError> {
        let args = serde_json::Value::Object(arguments.unwrap_or_default());
        match name {
            "search_adrs" => decode(name, args).map(Self::SearchAdrs),
            "read_file" => decode(name, args).map(Self::ReadFile),
            "find_impact_builders" => decode(name, args).map(Self::FindImpactBuilders),
            "get_schema_info" => decode(name, args).map(Self::GetSchemaInfo),
            "search_code" => decode(name, args).map(Self::SearchCode),
            other => Err(DispatchError::UnknownTool(other.to_string())),
        }
    }

    /// The tool name this request targets.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchAdrs(_) => "search_adrs",
            Self::ReadFile(_) => "read_file",
            Self::FindImpactBuilders(_) => "find_impact_builders",
            Self::GetSchemaInfo(_) => "get_schema_info",
            Self::SearchCode(_) => "search_code",
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &str, args: serde_json::Value) -> Result<T, DispatchError> {
    serde_json::from_value(args).map_err(|e| DispatchError::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}
