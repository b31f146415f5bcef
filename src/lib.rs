//! federation_scrape library: single-run scraping jobs for Kazakhstan sports data
//!
//! Two jobs share one pipeline: fetch a listing page, collect the detail pages
//! it links to, extract structured data from each and stream it to an output
//! sink (console text, CSV or JSON lines).
//!
//! - `federations`: contacts and officials of every federation listed on
//!   olympic.kz, plus its Olympic medal tally
//! - `medals`: every Olympic result of Kazakhstan listed on olympedia.org
//!
//! # Example
//!
//! ```no_run
//! use federation_scrape::{run_federations, Config, Job, OutputFormat};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     format: OutputFormat::Csv,
//!     output: Some(std::path::PathBuf::from("federations.csv")),
//!     ..Config::for_job(Job::Federations)
//! };
//!
//! let report = run_federations(&config).await?;
//! println!("Processed {} pages: {} succeeded, {} failed",
//!          report.total, report.succeeded, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod links;
pub mod record;
pub mod results;
mod run;
mod utils;

// Re-export public API
pub use config::{Config, Job, Locale, LogFormat, LogLevel, OutputFormat};
pub use run::{run_federations, run_medals, RunReport};

/// Runs `job` with `config`.
///
/// # Errors
///
/// See [`run_federations`] and [`run_medals`].
pub async fn run_job(job: Job, config: &Config) -> anyhow::Result<RunReport> {
    match job {
        Job::Federations => run_federations(config).await,
        Job::Medals => run_medals(config).await,
    }
}
