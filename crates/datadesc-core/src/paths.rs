//! Lexical path handling for base paths and remote references
//!
//! Nothing here touches the filesystem: `..` is folded against the path
//! text, so a reference to a file that does not exist still resolves to the
//! location the loader will report as missing.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without consulting the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(part) => normalized.push(part),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Make `path` absolute against the current directory, then normalize it
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = std::env::current_dir().map_err(|e| Error::io_error(path, e))?;
    Ok(normalize(&cwd.join(path)))
}

/// Directory that anchors relative references found in a document
pub fn base_dir(base_path: &Path) -> &Path {
    match base_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => base_path,
    }
}

/// Locate a remote reference relative to the referencing document's path
pub fn resolve_remote(base_path: &Path, remote: &str) -> PathBuf {
    normalize(&base_dir(base_path).join(remote))
}
