// src/progress.rs

//! Progress events emitted while a copy plan is written.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Receives the copy events of a run.
///
/// `entry_written` is called once per plan entry, after the file was written
/// or the directory created, with its 1-based position in the plan.
///
/// # Examples
///
/// ```
/// use resfilter::progress::CopyProgress;
/// use std::path::Path;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Log(Mutex<Vec<String>>);
///
/// impl CopyProgress for Log {
///     fn plan_started(&self, total: usize) {
///         self.0.lock().unwrap().push(format!("{} to go", total));
///     }
///     fn entry_written(&self, relative: &Path, index: usize) {
///         self.0.lock().unwrap().push(format!("{} {}", index, relative.display()));
///     }
///     fn finished(&self, _written: usize) {}
/// }
///
/// let log = Log::default();
/// log.plan_started(1);
/// log.entry_written(Path::new("conf/app.properties"), 1);
/// assert_eq!(*log.0.lock().unwrap(), ["1 to go", "1 conf/app.properties"]);
/// ```
pub trait CopyProgress: Send + Sync {
    /// A non-empty plan of `total` entries is about to be written.
    fn plan_started(&self, total: usize);
    /// The entry at `relative` was written; `index` counts from 1.
    fn entry_written(&self, relative: &Path, index: usize);
    /// All `written` entries are in place and the target was touched.
    fn finished(&self, written: usize);
}

/// Ignores every event.
pub struct NoOpProgress;

impl CopyProgress for NoOpProgress {
    fn plan_started(&self, _total: usize) {}
    fn entry_written(&self, _relative: &Path, _index: usize) {}
    fn finished(&self, _written: usize) {}
}

/// Draws the run as an `indicatif` bar on stderr.
#[cfg(feature = "progress")]
pub struct CopyProgressBar {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl CopyProgressBar {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{bar:30}] {pos}/{len} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for CopyProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl CopyProgress for CopyProgressBar {
    fn plan_started(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn entry_written(&self, relative: &Path, index: usize) {
        self.bar.set_message(relative.display().to_string());
        self.bar.set_position(index as u64);
    }

    fn finished(&self, written: usize) {
        self.bar
            .finish_with_message(format!("{} entries written", written));
    }
}
