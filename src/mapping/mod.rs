//! Content mapping applied to each file as it is copied.
//!
//! A filter holds exactly one [`MappingSpec`]: plain copy, placeholder
//! substitution from a key/value table, or an arbitrary callback. Callers
//! describe the mapping they want with a [`MappingArgument`], which is
//! validated once when it is handed to `Filter::using`.

use crate::errors::{ConfigError, Error, Result};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

mod syntax;

pub use syntax::PlaceholderSyntax;

/// Replacement values, keyed by placeholder key.
pub type Table = BTreeMap<String, String>;

type CallbackFn = dyn Fn(&Path, Vec<u8>) -> anyhow::Result<Vec<u8>> + Send + Sync;

/// A user-supplied content transform.
///
/// It receives the path of the file relative to its source root and the raw
/// content, and returns the content to write. An error aborts the run.
///
/// # Examples
///
/// ```
/// use resfilter::mapping::Callback;
///
/// let upper = Callback::new(|_path, content| Ok(content.to_ascii_uppercase()));
/// ```
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Path, Vec<u8>) -> anyhow::Result<Vec<u8>> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    fn call(&self, relative_path: &Path, content: Vec<u8>) -> anyhow::Result<Vec<u8>> {
        (self.0)(relative_path, content)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// The mapping a filter applies to file content.
#[derive(Debug, Clone, Default)]
pub enum MappingSpec {
    /// Files are copied byte for byte.
    #[default]
    None,
    /// Placeholders recognized by `syntax` are replaced with values from `table`.
    Placeholders {
        syntax: PlaceholderSyntax,
        table: Table,
    },
    /// Content is replaced by whatever the callback returns.
    Callback(Callback),
}

impl MappingSpec {
    /// Returns `true` for a plain copy.
    pub fn is_identity(&self) -> bool {
        matches!(self, MappingSpec::None)
    }

    /// Maps the raw content of the file at `relative_path`.
    ///
    /// # Errors
    /// * `Error::Transform` if the callback fails.
    /// * `Error::UnsupportedMapping` if a regex syntax without a capturing group
    ///   was constructed directly instead of through `using`.
    pub fn apply(&self, relative_path: &Path, content: Vec<u8>) -> Result<Vec<u8>> {
        match self {
            MappingSpec::None => Ok(content),
            MappingSpec::Placeholders { syntax, table } => {
                if !syntax.has_key_group() {
                    return Err(Error::UnsupportedMapping(format!(
                        "placeholder pattern '{}' has no capturing group",
                        syntax
                    )));
                }
                let mapped = match syntax.substitute(&content, |key| table.get(key).cloned()) {
                    Cow::Owned(mapped) => Some(mapped),
                    Cow::Borrowed(_) => None,
                };
                Ok(mapped.unwrap_or(content))
            }
            MappingSpec::Callback(callback) => {
                callback
                    .call(relative_path, content)
                    .map_err(|source| Error::Transform {
                        path: relative_path.display().to_string(),
                        source,
                    })
            }
        }
    }
}

/// The shapes accepted by `Filter::using`.
///
/// Most callers never name this type and pass a table, a `(syntax, table)`
/// pair or a [`Callback`] directly; the `From` impls below do the wrapping.
#[derive(Debug, Clone)]
pub enum MappingArgument {
    /// Reset to a plain copy.
    None,
    /// A table with the default `${key}` syntax.
    Table(Table),
    /// A syntax given by name (`"maven"`, `"ant"`, `"ruby"`) and a table.
    Named(String, Table),
    /// An explicit syntax and a table.
    Syntax(PlaceholderSyntax, Table),
    /// A regex source whose capture groups form the key, and a table.
    Pattern(String, Table),
    /// A content callback.
    Callback(Callback),
}

impl From<Table> for MappingArgument {
    fn from(table: Table) -> Self {
        MappingArgument::Table(table)
    }
}

impl From<HashMap<String, String>> for MappingArgument {
    fn from(table: HashMap<String, String>) -> Self {
        MappingArgument::Table(table.into_iter().collect())
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for MappingArgument {
    fn from(pairs: [(&'a str, &'a str); N]) -> Self {
        MappingArgument::Table(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl From<(PlaceholderSyntax, Table)> for MappingArgument {
    fn from((syntax, table): (PlaceholderSyntax, Table)) -> Self {
        MappingArgument::Syntax(syntax, table)
    }
}

impl From<(&str, Table)> for MappingArgument {
    fn from((name, table): (&str, Table)) -> Self {
        MappingArgument::Named(name.to_string(), table)
    }
}

impl From<(Regex, Table)> for MappingArgument {
    fn from((pattern, table): (Regex, Table)) -> Self {
        MappingArgument::Syntax(PlaceholderSyntax::Regex(pattern), table)
    }
}

impl From<Callback> for MappingArgument {
    fn from(callback: Callback) -> Self {
        MappingArgument::Callback(callback)
    }
}

impl TryFrom<MappingArgument> for MappingSpec {
    type Error = Error;

    fn try_from(arg: MappingArgument) -> Result<Self> {
        let (syntax, table) = match arg {
            MappingArgument::None => return Ok(MappingSpec::None),
            MappingArgument::Callback(callback) => return Ok(MappingSpec::Callback(callback)),
            MappingArgument::Table(table) => (PlaceholderSyntax::Maven, table),
            MappingArgument::Named(name, table) => (name.parse::<PlaceholderSyntax>()?, table),
            MappingArgument::Syntax(syntax, table) => (syntax, table),
            MappingArgument::Pattern(source, table) => {
                let pattern = Regex::new(&source).map_err(|e| {
                    ConfigError::InvalidMappingArgument {
                        reason: format!("invalid placeholder regex '{}': {}", source, e),
                    }
                })?;
                (PlaceholderSyntax::Regex(pattern), table)
            }
        };
        if !syntax.has_key_group() {
            return Err(ConfigError::InvalidMappingArgument {
                reason: format!(
                    "expected regular expression with a capturing group, got '{}'",
                    syntax
                ),
            }
            .into());
        }
        Ok(MappingSpec::Placeholders { syntax, table })
    }
}
