//! Defines the copy plan produced by the planning stage and consumed by execution.

use std::collections::btree_map::{self, BTreeMap};
use std::path::{Path, PathBuf};

/// The files a single run will materialize in the target tree.
///
/// Maps each relative path (identical under the source root and the target
/// root) to the absolute source file chosen for it. Entries iterate in
/// relative-path order.
///
/// # Examples
///
/// ```
/// use resfilter::core_types::CopyPlan;
/// use std::path::Path;
///
/// let mut plan = CopyPlan::default();
/// assert!(plan.is_empty());
///
/// plan.insert("a.txt".into(), "/src/one/a.txt".into());
/// plan.insert("a.txt".into(), "/src/two/a.txt".into()); // later source wins
///
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.source_for(Path::new("a.txt")), Some(Path::new("/src/two/a.txt")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    entries: BTreeMap<PathBuf, PathBuf>,
}

impl CopyPlan {
    /// Records `source` for `relative_path`, replacing any earlier choice.
    ///
    /// Returns the source that was replaced, if any.
    pub fn insert(&mut self, relative_path: PathBuf, source: PathBuf) -> Option<PathBuf> {
        self.entries.insert(relative_path, source)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The absolute source chosen for `relative_path`.
    pub fn source_for(&self, relative_path: &Path) -> Option<&Path> {
        self.entries.get(relative_path).map(PathBuf::as_path)
    }

    /// Iterates `(relative_path, source)` pairs in relative-path order.
    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, PathBuf> {
        self.entries.iter()
    }

    /// The relative paths in the plan, in order.
    pub fn relative_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }
}

impl<'a> IntoIterator for &'a CopyPlan {
    type Item = (&'a PathBuf, &'a PathBuf);
    type IntoIter = btree_map::Iter<'a, PathBuf, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
