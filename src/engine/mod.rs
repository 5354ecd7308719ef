//! The `Filter` façade: configuration, validation and the `run` entry point.

use crate::config::expand_path;
use crate::core_types::CopyPlan;
use crate::errors::{ConfigError, Error, Result};
use crate::filtering::PatternSet;
use crate::mapping::{MappingArgument, MappingSpec};
use crate::planning::build_plan;
use crate::progress::CopyProgress;
use log::{debug, info};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod execute;
mod hook;

pub use hook::RebuildHook;

/// Copies files from one or more source directories into a target directory,
/// optionally mapping their content on the way.
///
/// Configure it with the builder methods, then call [`run`](Filter::run).
/// Include/exclude patterns are relative to each source directory, so
/// `include(["*.png"])` selects the PNG files at the top of every source.
///
/// # Examples
///
/// ```
/// use resfilter::Filter;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// let src = temp.path().join("src");
/// fs::create_dir(&src)?;
/// fs::write(src.join("app.properties"), "version=${version}")?;
/// fs::write(src.join("logo.png"), [0x89, b'P', b'N', b'G'])?;
///
/// let filter = Filter::new()
///     .from([&src])
///     .into(temp.path().join("target"))
///     .include(["*.properties"])
///     .using([("version", "1.2")])?;
///
/// assert!(filter.run()?);
/// assert_eq!(
///     fs::read_to_string(temp.path().join("target/app.properties"))?,
///     "version=1.2"
/// );
/// assert!(!temp.path().join("target/logo.png").exists());
///
/// // Nothing changed since the last run.
/// assert!(!filter.run()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    sources: Vec<PathBuf>,
    target: Option<PathBuf>,
    patterns: PatternSet,
    mapping: MappingSpec,
}

impl Filter {
    /// Creates a filter with no sources, no target, no patterns and no mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds source directories.
    ///
    /// Paths are expanded to absolute paths; a path that is already registered
    /// is ignored. The directories only need to exist when the filter runs.
    #[allow(clippy::should_implement_trait)]
    pub fn from<I, P>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for source in sources {
            let source = expand_path(source);
            if !self.sources.contains(&source) {
                self.sources.push(source);
            }
        }
        self
    }

    /// Sets the target directory, replacing any previous one.
    #[allow(clippy::should_implement_trait)]
    pub fn into<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.target = Some(expand_path(dir));
        self
    }

    /// Adds include patterns. With no include patterns every file is included.
    pub fn include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.add_includes(patterns);
        self
    }

    /// Same as [`include`](Filter::include).
    pub fn add<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include(patterns)
    }

    /// Adds exclude patterns. Excludes win over includes.
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.add_excludes(patterns);
        self
    }

    /// Sets the content mapping, replacing any previous one.
    ///
    /// Accepts a key/value table (`${key}` placeholders), a `(syntax, table)`
    /// pair, a `(regex, table)` pair, a [`Callback`](crate::mapping::Callback),
    /// or [`MappingArgument::None`] for a plain copy.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidMappingArgument` for an unknown syntax name
    /// or a regex without a capturing group.
    pub fn using<A: Into<MappingArgument>>(mut self, mapping: A) -> Result<Self> {
        self.mapping = MappingSpec::try_from(mapping.into())?;
        Ok(self)
    }

    /// Removes all sources and include/exclude patterns.
    pub fn clear(mut self) -> Self {
        self.sources.clear();
        self.patterns.clear();
        self
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn mapping(&self) -> &MappingSpec {
        &self.mapping
    }

    /// Validates the configuration and computes what a run would copy, without
    /// writing anything.
    pub fn plan(&self) -> Result<CopyPlan> {
        let target = self.validate()?;
        let patterns = self.patterns.compile()?;
        build_plan(&self.sources, target, &patterns)
    }

    /// Copies every selected file that is missing from the target or older
    /// than its source.
    ///
    /// Returns `true` if anything was copied. When nothing needs copying the
    /// target directory is left untouched and `false` is returned.
    ///
    /// # Errors
    /// * `ConfigError::NoSources` / `ConfigError::NoTarget` if the filter is incomplete.
    /// * `Error::MissingSource` if a source directory does not exist.
    /// * `Error::Io` / `Error::Transform` if copying fails; files written
    ///   before the failure remain in the target.
    pub fn run(&self) -> Result<bool> {
        self.run_with_progress(None)
    }

    /// Like [`run`](Filter::run), reporting each written file to `progress`.
    pub fn run_with_progress(&self, progress: Option<Arc<dyn CopyProgress>>) -> Result<bool> {
        let target = self.validate()?;
        let span = tracing::info_span!(
            "filter_run",
            target = %target.display(),
            sources = self.sources.len()
        );
        let _guard = span.enter();

        let patterns = self.patterns.compile()?;
        let plan = build_plan(&self.sources, target, &patterns)?;
        if plan.is_empty() {
            info!("'{}' is up to date", target.display());
            return Ok(false);
        }

        execute::execute_plan(&plan, target, &self.mapping, progress.as_deref())?;
        info!("Filtered {} files into '{}'", plan.len(), target.display());
        Ok(true)
    }

    fn validate(&self) -> Result<&Path> {
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources.into());
        }
        for source in &self.sources {
            if !source.is_dir() {
                return Err(Error::MissingSource {
                    path: source.display().to_string(),
                });
            }
        }
        let target = self.target.as_deref().ok_or(ConfigError::NoTarget)?;
        debug!(
            "Filtering {} source(s) into '{}'",
            self.sources.len(),
            target.display()
        );
        Ok(target)
    }
}

/// Displays the target directory, or nothing if none is set.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{}", target.display()),
            None => Ok(()),
        }
    }
}
