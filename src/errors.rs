//! Defines the error types returned by the filter.
//!
//! `Error` categorizes everything that can stop a `run`: bad configuration,
//! missing source directories, I/O failures while copying, and failures raised
//! by user-supplied content callbacks.

use std::path::Path;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller of `Filter::run`, `Filter::plan` or `Filter::using`.
#[derive(Error, Debug)]
pub enum Error {
    /// The filter is not configured well enough to run.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A configured source directory does not exist (or is not a directory).
    #[error("Source directory '{path}' doesn't exist")]
    MissingSource {
        /// The expanded source path.
        path: String,
    },

    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A content callback failed while mapping a file.
    #[error("Mapping callback failed for '{path}': {source}")]
    Transform {
        /// The relative path being mapped.
        path: String,
        /// Whatever the callback returned.
        #[source]
        source: anyhow::Error,
    },

    /// The mapping reached the copy step in a shape `using` would have rejected.
    #[error("Unsupported mapping: {0}")]
    UnsupportedMapping(String),
}

/// Configuration problems, detected either by `using` or at the start of a run.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No source directory specified, where am I going to find the files to filter?")]
    NoSources,

    #[error("No target directory specified, where am I going to copy the files to?")]
    NoTarget,

    #[error("Invalid mapping argument: {reason}")]
    InvalidMappingArgument { reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
