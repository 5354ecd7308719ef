use super::Filter;
use crate::config::expand_path;
use crate::errors::Result;
use log::debug;
use std::path::Path;

/// Receives notice that a directory managed by an outer build graph was rebuilt.
///
/// A build graph that owns a filter's target installs the filter as a hook on
/// that target; the filter itself never decides when to run.
pub trait RebuildHook {
    /// Reacts to `path` being rebuilt. Returns whether any work was done.
    fn on_rebuilt(&self, path: &Path) -> Result<bool>;
}

/// Runs the filter when its own target is rebuilt and it has sources.
impl RebuildHook for Filter {
    fn on_rebuilt(&self, path: &Path) -> Result<bool> {
        let rebuilt = expand_path(path);
        match self.target() {
            Some(target) if target == rebuilt && !self.sources().is_empty() => self.run(),
            _ => {
                debug!("Ignoring rebuild of '{}'", rebuilt.display());
                Ok(false)
            }
        }
    }
}
