//! Ledger Lore MCP Server
//!
//! An MCP (Model Context Protocol) server that gives LLM agents read-only
//! access to the knowledge kept in the GL publisher repository:
//! architecture decision records, module docs, the Oracle GL schema
//! reference and the source code itself.
//!
//! # Overview
//!
//! This library provides:
//! - MCP server implementation with stdio transport
//! - Filesystem-backed queries that never write to the repository
//! - Path containment for every caller-supplied path
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     stdio      ┌─────────────────┐
//! │   LLM Client    │◄──────────────►│   MCP Server    │
//! │                 │    (MCP)       │  (ledger-lore)  │
//! └─────────────────┘                └────────┬────────┘
//!                                             │
//!                                      ┌──────▼──────┐
//!                                      │ Repository  │
//!                                      └──────┬──────┘
//!                                             │ read-only
//!                                      ┌──────▼────────┐
//!                                      │ oracle-gl-    │
//!                                      │ publisher     │
//!                                      │ checkout      │
//!                                      └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types for the entire application
//! - [`config`] - Repository root resolution and client configuration
//! - [`mcp`] - MCP server implementation
//! - [`repo`] - Repository queries
//!
//! # Example
//!
//! ```ignore
//! use ledger_lore::{mcp::LedgerLore, repo::Repository};
//! use rmcp::{ServiceExt, transport::stdio};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = Repository::builder()
//!         .root("/home/me/IdeaProjects/oracle-gl-publisher")
//!         .build()?;
//!
//!     LedgerLore::new(repo).serve(stdio()).await?.waiting().await?;
//!     Ok(())
//! }
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod mcp;
pub mod repo;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
