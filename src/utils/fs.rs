use crate::utils::{OptimizerResult, PathError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get file size in bytes
pub fn file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    let path = path.as_ref();
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| PathError::IO(format!("{}: {}", path.display(), e)).into())
}

/// Check if file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Back up `relative` (a path under `assets_root`) into
/// `assets_root/originals/` before it gets overwritten in place.
///
/// An existing backup is never replaced, so repeated runs keep the bytes of
/// the true original rather than an already-optimized copy. Returns the
/// backup path when a copy was made, `None` when one was already present.
pub fn backup_original(assets_root: &Path, relative: &Path) -> OptimizerResult<Option<PathBuf>> {
    let source = assets_root.join(relative);
    let backup = assets_root.join("originals").join(relative);

    if backup.exists() {
        debug!("Backup already present for {}", relative.display());
        return Ok(None);
    }

    if let Some(parent) = backup.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&source, &backup)?;
    debug!("Backed up {} to {}", relative.display(), backup.display());
    Ok(Some(backup))
}
