// src/cli.rs

use clap::Parser;

/// Copies resource directories into a target directory, filtering files by glob
/// and substituting placeholders in their content.
///
/// Only files that are missing from the target, or older there than in the
/// source, are copied. When several sources contain the same relative path,
/// the last source listed wins.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Source directories to copy from.
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Target directory to copy into (created if missing).
    #[arg(short = 'o', long = "into", value_name = "DIR")]
    pub into: String,

    // --- Selection Options ---
    /// Copy only files whose path relative to their source matches this glob (repeatable).
    #[arg(short = 'i', long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip files whose path relative to their source matches this glob (repeatable).
    /// Takes precedence over --include.
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    // --- Mapping Options ---
    /// Replace the placeholder KEY with VALUE (repeatable). Overrides --values.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,

    /// Read replacement values from a JSON object file.
    #[arg(long, value_name = "FILE")]
    pub values: Option<String>,

    /// Placeholder syntax: maven (${key}), ant (@key@) or ruby (#{key}).
    #[arg(short = 's', long, value_name = "SYNTAX", value_parser = ["maven", "ant", "ruby"], conflicts_with = "regex")]
    pub syntax: Option<String>,

    /// Custom placeholder regex; its capture groups, concatenated, form the key.
    #[arg(short = 'r', long, value_name = "REGEX")]
    pub regex: Option<String>,

    // --- Execution Options ---
    /// List the files that would be copied without copying them.
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
