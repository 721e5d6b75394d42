//! MCP server implementation for ledger-lore.
//!
//! This module contains the `LedgerLore` struct that implements the MCP
//! server: tool and resource registry plus dispatch. Domain faults never
//! cross the tool-call boundary as protocol errors; they are rendered as
//! `Error: <message>` text.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, JsonObject,
    ListResourcesResult, ListToolsResult, PaginatedRequestParams, ReadResourceRequestParams,
    ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{
    ErrorData as McpError, ServerHandler, handler::server::wrapper::Parameters, tool, tool_router,
};
use tracing::{debug, error, info};

use crate::error::DispatchError;
use crate::repo::Repository;

use super::format::{
    format_adr_results, format_builders, format_code_matches, format_error, format_file,
};
use super::resources::{RESOURCES, ResourceDescriptor, read_resource_text};
use super::tools::{
    FindImpactBuildersParams, GetSchemaInfoParams, ReadFileParams, SearchAdrsParams,
    SearchCodeParams, TOOL_NAMES, ToolRequest,
};

/// MCP server exposing read-only knowledge queries over the GL publisher
/// repository.
#[derive(Clone)]
pub struct LedgerLore {
    /// Repository all queries run against.
    repo: Arc<Repository>,
    tool_router: ToolRouter<LedgerLore>,
}

impl LedgerLore {
    /// Creates a new `LedgerLore` instance.
    ///
    /// # Arguments
    ///
    /// * `repo` - Repository handle every tool call resolves paths against.
    pub fn new(repo: Repository) -> Self {
        Self {
            repo: Arc::new(repo),
            tool_router: Self::tool_router(),
        }
    }

    /// Returns the repository handle.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Tool descriptors with their generated input schemas, in the fixed
    /// order of [`TOOL_NAMES`].
    pub fn tool_descriptors(&self) -> Vec<Tool> {
        let mut tools = self.tool_router.list_all();
        tools.sort_by_key(|tool| {
            TOOL_NAMES
                .iter()
                .position(|name| *name == tool.name.as_ref())
                .unwrap_or(TOOL_NAMES.len())
        });
        tools
    }

    /// Resource descriptors, in advertised order.
    pub fn resource_descriptors(&self) -> &'static [ResourceDescriptor] {
        &RESOURCES
    }

    /// Renders a resource as text.
    pub fn resource_text(&self, uri: &str) -> String {
        read_resource_text(&self.repo, uri)
    }

    /// Validates and runs a raw tool call, always producing text.
    ///
    /// Unknown tools and malformed arguments are reported in the text
    /// rather than as protocol errors.
    pub async fn call_tool_text(&self, name: &str, arguments: Option<JsonObject>) -> String {
        match ToolRequest::parse(name, arguments) {
            Ok(request) => self.dispatch(request).await,
            Err(DispatchError::UnknownTool(name)) => {
                debug!(tool = %name, "unknown tool requested");
                format!("Unknown tool: {name}")
            }
            Err(err) => format_error(err),
        }
    }

    /// Runs a validated request on the blocking pool and formats the result.
    pub async fn dispatch(&self, request: ToolRequest) -> String {
        let tool = request.name();
        let repo = Arc::clone(&self.repo);
        debug!(tool, "dispatching tool call");

        match tokio::task::spawn_blocking(move || execute(&repo, request)).await {
            Ok(text) => text,
            Err(e) => {
                error!(tool, error = %e, "tool task failed");
                format_error(format!("{tool} failed: {e}"))
            }
        }
    }
}

/// Runs one request against the repository.
fn execute(repo: &Repository, request: ToolRequest) -> String {
    match request {
        ToolRequest::SearchAdrs(params) => {
            format_adr_results(&repo.search_adrs(Some(&params.query)))
        }
        ToolRequest::ReadFile(params) => match repo.read_file(&params.path) {
            Ok(content) => format_file(&params.path, &content),
            Err(e) => {
                debug!(path = %params.path, error = %e, "read_file rejected");
                format_error(e)
            }
        },
        ToolRequest::FindImpactBuilders(params) => {
            let query = params.query.as_deref();
            format_builders(&repo.find_builders(query), query)
        }
        ToolRequest::GetSchemaInfo(params) => {
            repo.schema_info(params.table.as_deref()).to_string()
        }
        ToolRequest::SearchCode(params) => {
            let limit = params.result_limit();
            match repo.search_code(&params.pattern, params.file_pattern.as_deref(), limit) {
                Ok(matches) => format_code_matches(&params.pattern, &matches),
                Err(e) => format_error(e),
            }
        }
    }
}

/// Tool implementations for `LedgerLore`.
#[tool_router]
impl LedgerLore {
    /// Search Architecture Decision Records by keyword.
    #[tool(
        description = "Search Architecture Decision Records by keyword. Matches titles and full text, case-insensitively."
    )]
    pub async fn search_adrs(
        &self,
        Parameters(params): Parameters<SearchAdrsParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.dispatch(ToolRequest::SearchAdrs(params)).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Read a file from the repository.
    #[tool(
        description = "Read a specific file from the oracle-gl-publisher repo. Paths are relative to the repo root and may not leave it."
    )]
    pub async fn read_file(
        &self,
        Parameters(params): Parameters<ReadFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.dispatch(ToolRequest::ReadFile(params)).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List Impact Builder implementations.
    #[tool(
        description = "Find Impact Builder implementations and the activity type each one accepts."
    )]
    pub async fn find_impact_builders(
        &self,
        Parameters(params): Parameters<FindImpactBuildersParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.dispatch(ToolRequest::FindImpactBuilders(params)).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Look up Oracle GL schema tables.
    #[tool(
        description = "Get Oracle GL schema table information. Omit the table for a list of documented tables."
    )]
    pub async fn get_schema_info(
        &self,
        Parameters(params): Parameters<GetSchemaInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.dispatch(ToolRequest::GetSchemaInfo(params)).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Search code and docs for a text pattern.
    #[tool(
        description = "Search code patterns in the repository. Case-insensitive substring match over Kotlin, Java and Markdown files by default, with two lines of context."
    )]
    pub async fn search_code(
        &self,
        Parameters(params): Parameters<SearchCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.dispatch(ToolRequest::SearchCode(params)).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl ServerHandler for LedgerLore {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "ledger-lore".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Read-only knowledge about the GL publisher: search ADRs, read files, \
                 list Impact Builders, look up Oracle GL schema tables and grep the code. \
                 Resources expose the ADR list, module READMEs and the schema reference."
                    .into(),
            ),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: self.tool_descriptors(),
        }))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = %request.name, "tool call");
        let text = self.call_tool_text(&request.name, request.arguments).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = RESOURCES
            .iter()
            .map(|descriptor| descriptor.to_resource())
            .collect();
        std::future::ready(Ok(ListResourcesResult {
            meta: None,
            next_cursor: None,
            resources,
        }))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!(uri = %request.uri, "resource read");
        let repo = Arc::clone(&self.repo);
        let uri = request.uri.clone();
        let text = tokio::task::spawn_blocking(move || read_resource_text(&repo, &uri))
            .await
            .unwrap_or_else(|e| format_error(format!("reading {} failed: {e}", request.uri)));
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn server() -> (TempDir, LedgerLore) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# Root").unwrap();
        let repo = Repository::builder().root(dir.path()).build().unwrap();
        (dir, LedgerLore::new(repo))
    }

    #[test]
    fn test_registry_has_five_tools() {
        let (_dir, server) = server();
        let names: Vec<String> = server
            .tool_descriptors()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, TOOL_NAMES);
    }

    #[test]
    fn test_tool_order_is_stable_across_instances() {
        let (_dir, first) = server();
        let expected: Vec<String> = first
            .tool_descriptors()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        for _ in 0..10 {
            let (_dir, other) = server();
            let names: Vec<String> = other
                .tool_descriptors()
                .into_iter()
                .map(|t| t.name.to_string())
                .collect();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn test_server_info_advertises_resources() {
        let (_dir, server) = server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert_eq!(info.server_info.name, "ledger-lore");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_text() {
        let (_dir, server) = server();
        let text = server.call_tool_text("drop_tables", None).await;
        assert_eq!(text, "Unknown tool: drop_tables");
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_text() {
        let (_dir, server) = server();
        let text = server.call_tool_text("read_file", None).await;
        assert!(text.starts_with("Error: invalid arguments for read_file"), "{text}");
    }

    #[tokio::test]
    async fn test_read_file_error_is_text() {
        let (_dir, server) = server();
        let args = serde_json::json!({"path": "../outside"});
        let text = server
            .call_tool_text("read_file", args.as_object().cloned())
            .await;
        assert_eq!(text, "Error: Invalid path: ../outside");
    }

    #[tokio::test]
    async fn test_read_file_success() {
        let (_dir, server) = server();
        let args = serde_json::json!({"path": "README.md"});
        let text = server
            .call_tool_text("read_file", args.as_object().cloned())
            .await;
        assert_eq!(text, "# README.md\n\n```\n# Root\n```");
    }
}
