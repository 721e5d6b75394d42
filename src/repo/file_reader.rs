//! Bounded, safe single-file retrieval.

use std::path::Path;

use tracing::debug;

use crate::error::FileReadError;

use super::path_guard;

/// Reads a repository file as UTF-8 text.
///
/// # Errors
///
/// Returns [`FileReadError`] when the path escapes the root, does not
/// exist, is not a regular file, or cannot be read as text.
pub fn read_file(relative_path: &str, root: &Path) -> Result<String, FileReadError> {
    let path = path_guard::resolve(root, relative_path)?;
    debug!(path = %path.display(), "reading repository file");
    Ok(std::fs::read_to_string(&path)?)
}
