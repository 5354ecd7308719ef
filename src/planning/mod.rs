//! Builds the copy plan for a run.
//!
//! Every source root is enumerated, each relative path is run through the
//! pattern set, and entries whose target counterpart is missing or older are
//! recorded in a [`CopyPlan`]. Directories go through the same checks as
//! files. Nothing is written here.

use crate::core_types::CopyPlan;
use crate::errors::{io_error_with_path, Result};
use crate::filtering::CompiledPatterns;
use filetime::FileTime;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

mod walker;

use walker::relative_entries;

/// Computes which files and directories need copying from `sources` into `target`.
///
/// Sources are visited in the given order. When several roots provide the same
/// relative path, the last root whose entry is out of date wins, so the result
/// does not depend on traversal order. An empty plan means everything is up to
/// date.
///
/// # Errors
/// Returns `Error::Io` if a source root cannot be listed or a file cannot be stat'ed.
pub fn build_plan(
    sources: &[PathBuf],
    target: &Path,
    patterns: &CompiledPatterns,
) -> Result<CopyPlan> {
    let mut plan = CopyPlan::default();

    for root in sources {
        for relative in relative_entries(root)? {
            if !patterns.matches(&relative) {
                debug!("Skipping '{}': filtered by patterns", relative.display());
                continue;
            }
            let src = root.join(&relative);
            let dst = target.join(&relative);
            if !needs_copy(&src, &dst)? {
                debug!("'{}' is up to date", dst.display());
                continue;
            }
            debug!("Planning '{}' from '{}'", relative.display(), src.display());
            if let Some(previous) = plan.insert(relative, src) {
                debug!("Overriding earlier source '{}'", previous.display());
            }
        }
    }

    Ok(plan)
}

/// The staleness check: copy if `dst` is missing or strictly older than `src`.
fn needs_copy(src: &Path, dst: &Path) -> Result<bool> {
    let dst_meta = match fs::metadata(dst) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(io_error_with_path(e, dst)),
    };
    let src_meta = fs::metadata(src).map_err(|e| io_error_with_path(e, src))?;
    Ok(FileTime::from_last_modification_time(&src_meta)
        > FileTime::from_last_modification_time(&dst_meta))
}
