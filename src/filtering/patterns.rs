// src/filtering/patterns.rs

use crate::errors::{ConfigError, Result};
use glob::{MatchOptions, Pattern};
use log::debug;
use std::path::Path;

/// `*`, `?` and `[...]` stay inside one path segment; `**` crosses segments.
/// A segment starting with `.` is only matched by a literal dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Include and exclude glob patterns, kept in the order they were added.
///
/// An empty include list selects everything. Excludes always win over includes.
///
/// # Examples
///
/// ```
/// use resfilter::filtering::PatternSet;
/// use std::path::Path;
///
/// let mut patterns = PatternSet::default();
/// patterns.add_includes(["*.txt", "docs/**/*.md"]);
/// patterns.add_excludes(["secret.txt"]);
///
/// let compiled = patterns.compile().unwrap();
/// assert!(compiled.matches(Path::new("a.txt")));
/// assert!(compiled.matches(Path::new("docs/guide/intro.md")));
/// assert!(!compiled.matches(Path::new("secret.txt")));
/// assert!(!compiled.matches(Path::new("nested/a.txt"))); // `*` stops at `/`
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl PatternSet {
    /// Appends include patterns.
    pub fn add_includes<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(patterns.into_iter().map(Into::into));
    }

    /// Appends exclude patterns.
    pub fn add_excludes<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(patterns.into_iter().map(Into::into));
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Removes every pattern.
    pub fn clear(&mut self) {
        self.includes.clear();
        self.excludes.clear();
    }

    /// Compiles the patterns for matching.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPattern` for the first pattern that is not a valid glob.
    pub fn compile(&self) -> Result<CompiledPatterns> {
        Ok(CompiledPatterns {
            includes: compile_all(&self.includes)?,
            excludes: compile_all(&self.excludes)?,
        })
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                ConfigError::InvalidPattern {
                    pattern: p.clone(),
                    reason: e.msg.to_string(),
                }
                .into()
            })
        })
        .collect()
}

/// A `PatternSet` ready to answer selection queries.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
}

impl CompiledPatterns {
    /// Returns `true` if `relative_path` is selected.
    ///
    /// The path must be relative to its source root; matching is any-match on
    /// both lists, with excludes taking precedence.
    pub fn matches(&self, relative_path: &Path) -> bool {
        let included = self.includes.is_empty()
            || self
                .includes
                .iter()
                .any(|p| p.matches_path_with(relative_path, MATCH_OPTIONS));
        if !included {
            debug!("{:?} matches no include pattern", relative_path);
            return false;
        }
        if let Some(p) = self
            .excludes
            .iter()
            .find(|p| p.matches_path_with(relative_path, MATCH_OPTIONS))
        {
            debug!("{:?} excluded by pattern '{}'", relative_path, p.as_str());
            return false;
        }
        true
    }
}
