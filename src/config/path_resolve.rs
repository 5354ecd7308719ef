// src/config/path_resolve.rs

use directories::BaseDirs;
use log::warn;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Expands `path` to an absolute path without touching the filesystem.
///
/// A leading `~` is replaced by the home directory, relative paths are joined
/// onto the current directory, and `.`/`..` components are folded lexically.
/// The path does not need to exist.
///
/// # Examples
///
/// ```
/// use resfilter::config::expand_path;
/// use std::path::Path;
///
/// # #[cfg(unix)]
/// assert_eq!(expand_path("/srv/app/../res/./img"), Path::new("/srv/res/img"));
/// ```
pub fn expand_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let expanded = expand_home(path).unwrap_or_else(|| path.to_path_buf());
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(e) => {
                warn!(
                    "Cannot resolve '{}' against the current directory: {}",
                    expanded.display(),
                    e
                );
                expanded
            }
        }
    };
    normalize(&absolute)
}

fn expand_home(path: &Path) -> Option<PathBuf> {
    let rest = path.strip_prefix("~").ok()?;
    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.home_dir().join(rest))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
