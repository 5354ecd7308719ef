//! Builds a configured `Filter` from command-line arguments, and the path
//! expansion shared by the builder API.

use crate::cli::Cli;
use crate::constants::DEFAULT_SYNTAX_NAME;
use crate::engine::Filter;
use crate::errors::Result;
use crate::mapping::{MappingArgument, Table};
use log::debug;
use std::path::Path;

mod parsing;
pub mod path_resolve;

pub use path_resolve::expand_path;

/// Creates the `Filter` described by `cli`.
///
/// Values from `--values` are loaded first and `--define` entries override
/// them. Without any values, syntax or regex the filter copies files as-is.
///
/// # Errors
/// Returns a configuration error for malformed definitions, an unreadable or
/// malformed values file, or an invalid placeholder syntax or regex.
pub fn build_filter(cli: Cli) -> Result<Filter> {
    let mut table = match &cli.values {
        Some(path) => parsing::read_values_file(Path::new(path))?,
        None => Table::new(),
    };
    for define in &cli.defines {
        let (key, value) = parsing::parse_define(define)?;
        table.insert(key, value);
    }

    let mapping = match (cli.regex, cli.syntax) {
        (Some(regex), _) => MappingArgument::Pattern(regex, table),
        (None, Some(syntax)) => MappingArgument::Named(syntax, table),
        (None, None) if !table.is_empty() => {
            MappingArgument::Named(DEFAULT_SYNTAX_NAME.to_string(), table)
        }
        (None, None) => MappingArgument::None,
    };
    debug!("Mapping argument from CLI: {:?}", mapping);

    Filter::new()
        .from(&cli.sources)
        .into(&cli.into)
        .include(cli.include)
        .exclude(cli.exclude)
        .using(mapping)
}
