//! The `resfilter` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use resfilter::prelude::*;
//!
//! let f = filter(["src/main/resources"])
//!     .into("target/classes")
//!     .include(["**/*.properties"]);
//! assert_eq!(f.patterns().includes(), &["**/*.properties"]);
//! ```

pub use crate::core_types::CopyPlan;
pub use crate::engine::{Filter, RebuildHook};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::filtering::PatternSet;
pub use crate::mapping::{Callback, MappingArgument, MappingSpec, PlaceholderSyntax, Table};
pub use crate::progress::{CopyProgress, NoOpProgress};
pub use crate::filter;
