//! `resfilter` copies one or more resource directories into a single target
//! directory, selecting files with include/exclude globs, skipping files that
//! are already up to date, and optionally rewriting their content on the way.
//!
//! A run goes through three stages:
//! 1.  **Select**: every file and directory under each source root is matched,
//!     by its path relative to that root, against the include/exclude patterns.
//! 2.  **Plan**: a selected entry is planned if its target counterpart is
//!     missing or strictly older. When several roots provide the same relative
//!     path, the last root wins.
//! 3.  **Copy**: planned directories are created and planned files are copied,
//!     or mapped through placeholder substitution (`${key}`, `@key@`, `#{key}`
//!     or a custom regex) or a callback. Then the target directory is touched.
//!
//! # Example: Library Usage
//!
//! ```
//! use resfilter::filter;
//! use resfilter::mapping::Table;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempdir()?;
//! let src = temp.path().join("resources");
//! fs::create_dir_all(src.join("conf"))?;
//! fs::write(src.join("conf/app.xml"), "<version>@version@</version>")?;
//! fs::write(src.join("notes.bak"), "scratch")?;
//!
//! let values = Table::from([("version".to_string(), "2.0".to_string())]);
//! let copied = filter([&src])
//!     .into(temp.path().join("target"))
//!     .exclude(["*.bak"])
//!     .using(("ant", values))?
//!     .run()?;
//!
//! assert!(copied);
//! assert_eq!(
//!     fs::read_to_string(temp.path().join("target/conf/app.xml"))?,
//!     "<version>2.0</version>"
//! );
//! assert!(!temp.path().join("target/notes.bak").exists());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod engine;
pub mod errors;
pub mod filtering;
pub mod mapping;
pub mod output;
pub mod planning;
pub mod prelude;
pub mod progress;

// Re-export key public types for easier use as a library
pub use core_types::CopyPlan;
pub use engine::{Filter, RebuildHook};
pub use errors::{Error, Result};
pub use mapping::{Callback, MappingArgument, MappingSpec, PlaceholderSyntax};

use std::path::Path;

/// Creates a filter that copies from `sources`. Shorthand for `Filter::new().from(sources)`.
///
/// A filter does nothing until [`Filter::run`] is called.
pub fn filter<I, P>(sources: I) -> Filter
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Filter::new().from(sources)
}
