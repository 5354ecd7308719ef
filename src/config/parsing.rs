// src/config/parsing.rs

use crate::errors::{io_error_with_path, ConfigError, Result};
use crate::mapping::Table;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A scalar accepted as a replacement value in a `--values` file.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueEntry {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl ValueEntry {
    fn into_string(self) -> String {
        match self {
            ValueEntry::Text(s) => s,
            ValueEntry::Number(n) => n.to_string(),
            ValueEntry::Flag(b) => b.to_string(),
        }
    }
}

/// Parses a `KEY=VALUE` definition. The value may itself contain `=`.
pub(super) fn parse_define(define: &str) -> Result<(String, String)> {
    match define.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(ConfigError::InvalidValue {
            option: "--define".to_string(),
            reason: format!("expected KEY=VALUE, got '{}'", define),
        }
        .into()),
    }
}

/// Reads a JSON object of replacement values.
///
/// Strings are used as-is; numbers and booleans are converted to their JSON
/// text. Nested arrays, objects and nulls are rejected.
pub(super) fn read_values_file(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let entries: BTreeMap<String, ValueEntry> =
        serde_json::from_str(&text).map_err(|e| ConfigError::InvalidValue {
            option: "--values".to_string(),
            reason: format!("'{}' is not a JSON object of scalar values: {}", path.display(), e),
        })?;
    Ok(entries
        .into_iter()
        .map(|(key, value)| (key, value.into_string()))
        .collect())
}
