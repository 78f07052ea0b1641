//! Path resolution utilities.

use std::path::{Component, Path, PathBuf};

use crate::error::TrackError;

/// Resolve a path to absolute, platform-canonical form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`). When the
/// file does not exist, falls back to lexical normalization:
/// - absolute paths are normalized as-is
/// - relative paths are joined onto the current directory first
///
/// # Errors
///
/// Fails when the current directory is needed but unavailable. Callers
/// must not record anything for the affected file.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf, TrackError> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| TrackError::Resolve(path.to_path_buf(), e))?;
        cwd.join(path)
    };
    Ok(normalize_lexically(&absolute))
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` above the root pops nothing and is dropped
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
