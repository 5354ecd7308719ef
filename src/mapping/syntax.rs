// src/mapping/syntax.rs

use crate::errors::{ConfigError, Error};
use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

static MAVEN_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{(.*?)\}").expect("maven placeholder regex is valid"));
static ANT_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(.*?)@").expect("ant placeholder regex is valid"));
static RUBY_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\{(.*?)\}").expect("ruby placeholder regex is valid"));

/// How placeholders are recognized in file content, and how their key is extracted.
///
/// | Variant | Placeholder | Key |
/// |---|---|---|
/// | `Maven` | `${key}` | text between the braces |
/// | `Ant` | `@key@` | text between the at-signs |
/// | `Ruby` | `#{key}` | text between the braces |
/// | `Regex` | any match of the pattern | all capture groups concatenated |
#[derive(Debug, Clone)]
pub enum PlaceholderSyntax {
    Maven,
    Ant,
    Ruby,
    Regex(Regex),
}

impl PlaceholderSyntax {
    /// The regular expression matching a whole placeholder.
    pub fn pattern(&self) -> &Regex {
        match self {
            PlaceholderSyntax::Maven => &MAVEN_PLACEHOLDER,
            PlaceholderSyntax::Ant => &ANT_PLACEHOLDER,
            PlaceholderSyntax::Ruby => &RUBY_PLACEHOLDER,
            PlaceholderSyntax::Regex(re) => re,
        }
    }

    /// Returns `true` if the pattern has a capturing group to take the key from.
    pub(crate) fn has_key_group(&self) -> bool {
        self.pattern().captures_len() > 1
    }

    /// Extracts the lookup key from one placeholder match.
    ///
    /// Returns `None` when the key is not valid UTF-8, which is treated as a lookup miss.
    fn key<'c>(&self, caps: &Captures<'c>) -> Option<Cow<'c, str>> {
        match self {
            PlaceholderSyntax::Regex(_) => {
                let mut key = Vec::new();
                for group in caps.iter().skip(1).flatten() {
                    key.extend_from_slice(group.as_bytes());
                }
                String::from_utf8(key).ok().map(Cow::Owned)
            }
            _ => caps
                .get(1)
                .and_then(|m| std::str::from_utf8(m.as_bytes()).ok())
                .map(Cow::Borrowed),
        }
    }

    /// Replaces every placeholder whose key `lookup` resolves.
    ///
    /// Matches are non-overlapping and leftmost. A placeholder whose key is
    /// unknown to `lookup` is left in the output exactly as it appeared.
    ///
    /// # Examples
    ///
    /// ```
    /// use resfilter::mapping::PlaceholderSyntax;
    ///
    /// let out = PlaceholderSyntax::Maven.substitute(
    ///     b"Version: ${version}, Build: ${build}",
    ///     |key| (key == "version").then(|| "1.2".to_string()),
    /// );
    /// assert_eq!(&out[..], b"Version: 1.2, Build: ${build}");
    /// ```
    pub fn substitute<'a, F>(&self, content: &'a [u8], lookup: F) -> Cow<'a, [u8]>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.pattern().replace_all(content, |caps: &Captures| {
            match self.key(caps).and_then(|key| lookup(&key)) {
                Some(value) => value.into_bytes(),
                None => caps[0].to_vec(),
            }
        })
    }

    fn name(&self) -> &str {
        match self {
            PlaceholderSyntax::Maven => "maven",
            PlaceholderSyntax::Ant => "ant",
            PlaceholderSyntax::Ruby => "ruby",
            PlaceholderSyntax::Regex(re) => re.as_str(),
        }
    }
}

impl fmt::Display for PlaceholderSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a syntax name: `maven`, `ant` or `ruby` (case-insensitive).
impl FromStr for PlaceholderSyntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maven" => Ok(PlaceholderSyntax::Maven),
            "ant" => Ok(PlaceholderSyntax::Ant),
            "ruby" => Ok(PlaceholderSyntax::Ruby),
            other => Err(ConfigError::InvalidMappingArgument {
                reason: format!(
                    "unknown placeholder syntax '{}', expected maven, ant or ruby",
                    other
                ),
            }
            .into()),
        }
    }
}
