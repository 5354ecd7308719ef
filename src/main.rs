// src/main.rs

use anyhow::Result;
use clap::Parser;
use resfilter::cli::Cli;
use resfilter::config::build_filter;
use resfilter::output::write_dry_run_output;
use resfilter::progress::CopyProgress;
#[cfg(feature = "progress")]
use resfilter::progress::CopyProgressBar;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "resfilter=debug".parse()?
                } else {
                    "resfilter=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting resfilter v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let cli = Cli::parse();
    let dry_run = cli.dry_run;
    let filter = match build_filter(cli) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    log::debug!("Filter configured: {:?}", filter);

    // --- Dry Run ---
    if dry_run {
        match filter.plan() {
            Ok(plan) => {
                let stdout = std::io::stdout();
                write_dry_run_output(&mut stdout.lock(), &plan)?;
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Show a progress bar only if stderr is a TTY.
    let progress: Option<Arc<dyn CopyProgress>> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) {
                Some(Arc::new(CopyProgressBar::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Execution & Error Handling ---
    match filter.run_with_progress(progress) {
        Ok(true) => println!("Filtered files into {}", filter),
        Ok(false) => println!("{} is up to date", filter),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
