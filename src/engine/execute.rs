use crate::core_types::CopyPlan;
use crate::errors::{io_error_with_path, Result};
use crate::mapping::MappingSpec;
use crate::progress::CopyProgress;
use filetime::{set_file_times, FileTime};
use log::debug;
use std::fs;
use std::path::Path;

/// Materializes `plan` under `target`.
///
/// Stops at the first failure; files already written stay in place.
pub(super) fn execute_plan(
    plan: &CopyPlan,
    target: &Path,
    mapping: &MappingSpec,
    progress: Option<&dyn CopyProgress>,
) -> Result<()> {
    fs::create_dir_all(target).map_err(|e| io_error_with_path(e, target))?;
    if let Some(p) = progress {
        p.plan_started(plan.len());
    }

    for (index, (relative, source)) in plan.iter().enumerate() {
        let dest = target.join(relative);
        if source.is_dir() {
            debug!("Creating directory '{}'", dest.display());
            fs::create_dir_all(&dest).map_err(|e| io_error_with_path(e, &dest))?;
        } else {
            copy_file(relative, source, &dest, mapping)?;
        }
        if let Some(p) = progress {
            p.entry_written(relative, index + 1);
        }
    }

    let now = FileTime::now();
    set_file_times(target, now, now).map_err(|e| io_error_with_path(e, target))?;

    if let Some(p) = progress {
        p.finished(plan.len());
    }
    Ok(())
}

fn copy_file(relative: &Path, source: &Path, dest: &Path, mapping: &MappingSpec) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
    }

    if mapping.is_identity() {
        debug!("Copying '{}' -> '{}'", source.display(), dest.display());
        fs::copy(source, dest).map_err(|e| io_error_with_path(e, source))?;
    } else {
        debug!("Mapping '{}' -> '{}'", source.display(), dest.display());
        let content = fs::read(source).map_err(|e| io_error_with_path(e, source))?;
        let mapped = mapping.apply(relative, content)?;
        fs::write(dest, mapped).map_err(|e| io_error_with_path(e, dest))?;
    }

    set_target_mode(dest)
}

#[cfg(unix)]
fn set_target_mode(dest: &Path) -> Result<()> {
    use crate::constants::TARGET_FILE_MODE;
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dest, fs::Permissions::from_mode(TARGET_FILE_MODE))
        .map_err(|e| io_error_with_path(e, dest))
}

#[cfg(not(unix))]
fn set_target_mode(_dest: &Path) -> Result<()> {
    Ok(())
}
