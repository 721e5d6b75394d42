//! MCP (Model Context Protocol) server module.
//!
//! This module implements the MCP server that exposes repository query
//! tools and resources to LLM applications. The server uses stdio
//! transport to communicate with clients.
//!
//! # Architecture
//!
//! The MCP module is organized into:
//! - `tools`: Tool parameter types and the validated `ToolRequest`
//! - `resources`: Static resource descriptors and their rendering
//! - `format`: Text rendering of query results
//! - `server`: The `LedgerLore` handler wiring it all together
//!
//! # Usage
//!
//! ```ignore
//! use ledger_lore::mcp::LedgerLore;
//! use rmcp::{ServiceExt, transport::stdio};
//!
//! let server = LedgerLore::new(repo);
//! server.serve(stdio()).await?.waiting().await?;
//! ```

pub mod format;
pub mod resources;
pub mod server;
pub mod tools;

// Re-export the LedgerLore for convenient access
pub use server::LedgerLore;
