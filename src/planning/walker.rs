use crate::errors::{io_error_with_path, Error, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every file and directory beneath `root`, as paths relative to `root`.
///
/// A directory is listed before its contents. Entries come back sorted by file
/// name at each level, so the order does not depend on the filesystem.
/// Symlinks are not followed into directories; a symlink to a file is listed
/// like the file itself.
pub(super) fn relative_entries(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(e, root))?;
        let path = entry.path();
        if !entry.file_type().is_dir() && !path.is_file() {
            warn!("Skipping '{}': not a regular file", path.display());
            continue;
        }
        match path.strip_prefix(root) {
            Ok(relative) => entries.push(relative.to_path_buf()),
            Err(_) => warn!(
                "Skipping '{}': not beneath source root '{}'",
                path.display(),
                root.display()
            ),
        }
    }

    debug!("Found {} entries under '{}'", entries.len(), root.display());
    Ok(entries)
}

fn walk_error(err: walkdir::Error, root: &Path) -> Error {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    io_error_with_path(err.into(), path)
}
