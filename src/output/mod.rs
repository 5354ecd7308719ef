//! Console output of the command-line tool.

pub mod dry_run;

pub use dry_run::write_dry_run_output;
