// src/filtering/mod.rs

//! Selects which source files take part in a run.
//!
//! Selection is purely pattern based and always evaluated against the path
//! relative to its source root, so one pattern set applies uniformly to every
//! source directory.

mod patterns;

pub use patterns::{CompiledPatterns, PatternSet};
