//! Error types for the ledger-lore MCP server.
//!
//! This module defines the error types used throughout the application,
//! organized by layer: path resolution, file reading, tool dispatch and
//! the crate-wide umbrella type.
//!
//! Only operational faults live here. "No matches", a missing ADR
//! directory or an unknown table name are ordinary results and are
//! rendered as text by the MCP layer.

use thiserror::Error;

/// Errors raised while resolving a repository-relative path.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path resolves outside the repository root.
    #[error("Invalid path: {0}")]
    Escapes(String),

    /// The path does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// The path exists but is not a regular file.
    #[error("Path is not a file: {0}")]
    NotAFile(String),

    /// Any other filesystem failure during resolution.
    #[error("Error reading file: {0}")]
    Io(String),
}

/// The single error returned by the file reader.
///
/// Carries a human-readable message, never a raw system error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FileReadError {
    message: String,
}

impl FileReadError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<PathError> for FileReadError {
    fn from(err: PathError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<std::io::Error> for FileReadError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Error reading file: {err}"))
    }
}

/// Errors raised by code search before any file is read.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The file pattern is not a valid glob.
    #[error("invalid file pattern '{pattern}': {reason}")]
    InvalidFilePattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// Why the glob failed to compile.
        reason: String,
    },
}

/// Errors raised while turning a raw tool call into a typed request.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The requested tool is not one of the registered tools.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments did not match the tool's input schema.
    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments {
        /// Name of the tool being called.
        tool: String,
        /// Why the arguments were rejected.
        reason: String,
    },
}

/// A unified error type for the entire application.
#[derive(Debug, Error)]
pub enum Error {
    /// Path resolution error.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// File read error.
    #[error("file read error: {0}")]
    FileRead(#[from] FileReadError),

    /// Code search error.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// Tool dispatch error.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ledger-lore operations.
pub type Result<T> = std::result::Result<T, Error>;
