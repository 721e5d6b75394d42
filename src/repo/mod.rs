//! Read-only query backend over the GL publisher repository.
//!
//! Every query re-scans the filesystem; nothing is indexed or cached.
//!
//! # Architecture
//!
//! The repo module is organized into:
//! - `path_guard`: containment checks for caller-supplied paths
//! - `text`: Markdown title and excerpt heuristics
//! - `adr`, `file_reader`, `builders`, `schema`, `code_search`: the queries
//! - `types`: result types shared with the MCP layer
//!
//! # Usage
//!
//! ```ignore
//! use ledger_lore::repo::Repository;
//!
//! let repo = Repository::builder().root("/path/to/oracle-gl-publisher").build()?;
//! let adrs = repo.search_adrs(Some("idempotency"));
//! ```

pub mod adr;
pub mod builders;
pub mod code_search;
pub mod file_reader;
pub mod path_guard;
pub mod schema;
pub mod text;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, FileReadError, Result, SearchError};

pub use code_search::ScanLimits;
pub use types::{BuilderResult, CodeMatch, SchemaInfo, SearchResult};

/// Formats `path` relative to `root` with `/` separators.
pub(crate) fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Configuration for building a [`Repository`].
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Repository root directory.
    pub root: PathBuf,
    /// Bounds on code search work.
    pub limits: ScanLimits,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            limits: ScanLimits::default(),
        }
    }
}

/// Builder for constructing a [`Repository`].
#[derive(Debug, Default)]
pub struct RepositoryBuilder {
    config: RepositoryConfig,
}

impl RepositoryBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repository root.
    #[must_use]
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Sets the maximum number of files a code search may read.
    #[must_use]
    pub fn max_scan_files(mut self, max_files: usize) -> Self {
        self.config.limits.max_files = max_files;
        self
    }

    /// Sets the size above which code search skips a file.
    #[must_use]
    pub fn max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.config.limits.max_file_bytes = max_file_bytes;
        self
    }

    /// Canonicalizes the root and builds the repository handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the root does not exist or is not a
    /// directory.
    pub fn build(self) -> Result<Repository> {
        let RepositoryConfig { root, limits } = self.config;
        let root = root.canonicalize().map_err(|e| {
            Error::Config(format!("repository root {}: {e}", root.display()))
        })?;
        if !root.is_dir() {
            return Err(Error::Config(format!(
                "repository root {} is not a directory",
                root.display()
            )));
        }
        debug!(root = %root.display(), ?limits, "repository opened");
        Ok(Repository { root, limits })
    }
}

/// Handle to an on-disk repository. Cheap to clone, immutable.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
    limits: ScanLimits,
}

impl Repository {
    /// Creates a new builder.
    pub fn builder() -> RepositoryBuilder {
        RepositoryBuilder::new()
    }

    /// Returns the canonical repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the code search limits.
    pub fn limits(&self) -> ScanLimits {
        self.limits
    }

    /// See [`adr::search_adrs`].
    pub fn search_adrs(&self, query: Option<&str>) -> Vec<SearchResult> {
        adr::search_adrs(query, &self.root)
    }

    /// See [`file_reader::read_file`].
    ///
    /// # Errors
    ///
    /// Returns [`FileReadError`] for escapes, missing files and read failures.
    pub fn read_file(&self, relative_path: &str) -> std::result::Result<String, FileReadError> {
        file_reader::read_file(relative_path, &self.root)
    }

    /// See [`builders::find_builders`].
    pub fn find_builders(&self, query: Option<&str>) -> Vec<BuilderResult> {
        builders::find_builders(query, &self.root)
    }

    /// See [`schema::get_schema_info`].
    pub fn schema_info(&self, table: Option<&str>) -> SchemaInfo {
        schema::get_schema_info(table, &self.root)
    }

    /// See [`code_search::search_code_with_limits`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when `file_pattern` is not a valid glob.
    pub fn search_code(
        &self,
        pattern: &str,
        file_pattern: Option<&str>,
        max_results: usize,
    ) -> std::result::Result<Vec<CodeMatch>, SearchError> {
        code_search::search_code_with_limits(
            pattern,
            &self.root,
            file_pattern,
            max_results,
            self.limits,
        )
    }

    /// ADR file names in sorted order, without the directory index.
    pub fn adr_names(&self) -> Vec<String> {
        adr::list_adr_files(&self.root)
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    /// Reads `<module>/README.md`, or `None` when it is missing or unreadable.
    pub fn module_readme(&self, module: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(module).join("README.md")).ok()
    }

    /// Reads the full schema reference document, if present.
    pub fn schema_document(&self) -> Option<String> {
        std::fs::read_to_string(self.root.join(schema::SCHEMA_DOC)).ok()
    }
}
