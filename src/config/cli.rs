//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::config::types::{Config, Job, Locale, LogFormat, LogLevel, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "federation_scrape",
    version,
    about = "Scrapes Kazakhstan sports federation contacts and Olympic results."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// One record per federation on the olympic.kz directory
    Federations(JobArgs),
    /// One row per Olympic result on the olympedia country page
    Medals(JobArgs),
}

impl Command {
    pub fn job(&self) -> Job {
        match self {
            Command::Federations(_) => Job::Federations,
            Command::Medals(_) => Job::Medals,
        }
    }

    /// Resolves the arguments against the job's defaults.
    pub fn into_config(self) -> Config {
        let job = self.job();
        match self {
            Command::Federations(args) | Command::Medals(args) => args.into_config(job),
        }
    }
}

/// Options shared by every job.
#[derive(Debug, Clone, Args)]
pub struct JobArgs {
    /// Listing page to start from (defaults to the job's public page)
    #[arg(long)]
    pub listing_url: Option<String>,

    /// Output file; `-` or absent writes to stdout
    #[arg(long, short = 'o', value_parser)]
    pub output: Option<PathBuf>,

    /// Output format (text for federations, csv for medals by default)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of detail pages fetched at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Language of the sentinel, medal names and CSV headers
    #[arg(long, value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl JobArgs {
    pub fn into_config(self, job: Job) -> Config {
        let defaults = Config::for_job(job);
        Config {
            listing_url: self.listing_url.unwrap_or(defaults.listing_url),
            output: self.output,
            format: self.format.unwrap_or(defaults.format),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent,
            max_concurrency: self.max_concurrency,
            locale: self.locale,
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}
