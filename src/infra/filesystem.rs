//! Filesystem operations
//!
//! Descriptor reads and module directory lookups.

use std::path::Path;

use tracing::debug;

use crate::error::FilesystemError;

/// Read the raw bytes of a file
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>, FilesystemError> {
    std::fs::read(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Whether `path` is a directory
///
/// One `stat` call, following symlinks. A regular file is not a directory.
/// Errors of any kind, permission errors and symlink loops included, count as
/// absence.
pub fn dir_exists(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_dir(),
        Err(e) => {
            debug!("Stat of {} failed: {e}", path.display());
            false
        }
    }
}
