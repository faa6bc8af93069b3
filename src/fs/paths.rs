//! Path and directory management.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
///
/// A bare file name has no parent to create and is left alone.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent).await,
        _ => Ok(()),
    }
}

/// Sibling path a download streams into before it is renamed onto `dest`.
///
/// The random component keeps concurrent downloads of the same file apart.
pub fn partial_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "download".to_string());
    dest.with_file_name(format!("{}.{}.part", name, uuid::Uuid::new_v4().simple()))
}

/// Platform cache location for downloaded models, falling back to `./models`.
pub fn default_models_dir() -> PathBuf {
    ProjectDirs::from("", "", "face2face")
        .map(|dirs| dirs.cache_dir().join("models"))
        .unwrap_or_else(|| PathBuf::from("models"))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
