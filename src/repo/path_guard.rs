//! Containment checks for repository-relative paths.
//!
//! Callers may pass attacker-influenced paths, so every ambiguity is a
//! fault. A candidate is rejected when it escapes the root either
//! lexically (`..` segments, absolute paths) or after symlinks are
//! resolved.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::PathError;

/// Resolves `relative` against `root` and returns the canonical path of
/// an existing regular file inside the root.
///
/// # Errors
///
/// Returns [`PathError::Escapes`] when the path leaves `root`,
/// [`PathError::NotFound`] when it does not exist and
/// [`PathError::NotAFile`] when it is not a regular file.
pub fn resolve(root: &Path, relative: &str) -> Result<PathBuf, PathError> {
    let root = root
        .canonicalize()
        .map_err(|e| PathError::Io(format!("repository root {}: {e}", root.display())))?;

    // Lexical pass first so non-existent traversal targets still read as escapes.
    let lexical = normalize(&root.join(relative));
    if !lexical.starts_with(&root) {
        return Err(PathError::Escapes(relative.to_string()));
    }

    let canonical = match lexical.canonicalize() {
        Ok(path) => path,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PathError::NotFound(relative.to_string()));
        }
        Err(e) => return Err(PathError::Io(e.to_string())),
    };

    // Symlinks may point anywhere.
    if !canonical.starts_with(&root) {
        return Err(PathError::Escapes(relative.to_string()));
    }

    if !canonical.is_file() {
        return Err(PathError::NotAFile(relative.to_string()));
    }

    Ok(canonical)
}

/// Collapses `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
