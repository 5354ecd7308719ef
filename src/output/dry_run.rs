// src/output/dry_run.rs

use crate::constants::{DRY_RUN_FOOTER, DRY_RUN_HEADER};
use crate::core_types::CopyPlan;
use log::debug;
use std::io::{self, Write};

/// Writes the output for a dry run (-n).
///
/// Lists each planned relative path together with the source it would be
/// copied from, in plan order.
pub fn write_dry_run_output(writer: &mut dyn Write, plan: &CopyPlan) -> io::Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "{}", DRY_RUN_HEADER)?;

    for (relative, source) in plan {
        writeln!(writer, "- {} (from {})", relative.display(), source.display())?;
    }

    writeln!(writer, "{}", DRY_RUN_FOOTER)?;
    writer.flush()
}
