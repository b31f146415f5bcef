//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `federation_scrape` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use federation_scrape::config::Cli;
use federation_scrape::initialization::init_logger_with;
use federation_scrape::run_job;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let job = cli.command.job();
    let config = cli.command.into_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_job(job, &config).await {
        Ok(report) => {
            // Summary goes to stderr; stdout may be carrying the records
            eprintln!(
                "Processed {} page{} ({} succeeded, {} failed, {} written) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.succeeded,
                report.failed,
                report.written,
                report.elapsed_seconds
            );
            if let Some(path) = config.output.as_ref().filter(|p| p.to_str() != Some("-")) {
                eprintln!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("federation_scrape error: {:#}", e);
            process::exit(1);
        }
    }
}
