//! Configuration types and CLI value enums.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_FEDERATIONS_URL, DEFAULT_MAX_CONCURRENCY, DEFAULT_RESULTS_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for scraped records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable block per record
    Text,
    /// Delimited file with a fixed header row
    Csv,
    /// One JSON object per line
    Jsonl,
}

/// Language used for fixed output strings: the "no information" sentinel,
/// medal names and CSV headers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Phrase rendered in place of a field the page did not provide.
    pub fn sentinel(self) -> &'static str {
        match self {
            Locale::En => "No information",
            Locale::Ru => "Нет информации",
        }
    }

    /// Placeholder for "no medal".
    pub fn no_medal(self) -> &'static str {
        "—"
    }
}

/// Which scraping job to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Job {
    /// Federation directory: one record per federation page.
    Federations,
    /// Olympic results: one row per athlete result.
    Medals,
}

impl Job {
    /// Listing page the job starts from when none is configured.
    pub fn default_listing_url(self) -> &'static str {
        match self {
            Job::Federations => DEFAULT_FEDERATIONS_URL,
            Job::Medals => DEFAULT_RESULTS_URL,
        }
    }

    pub fn default_format(self) -> OutputFormat {
        match self {
            Job::Federations => OutputFormat::Text,
            Job::Medals => OutputFormat::Csv,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use federation_scrape::{Config, Job};
///
/// let config = Config {
///     timeout_seconds: 30,
///     ..Config::for_job(Job::Federations)
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Listing page (federation directory or country results page)
    pub listing_url: String,

    /// Output file; `None` writes to stdout
    pub output: Option<PathBuf>,

    /// Output format
    pub format: OutputFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum number of detail pages fetched at once
    pub max_concurrency: usize,

    /// Language of fixed output strings
    pub locale: Locale,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Default configuration for the given job.
    pub fn for_job(job: Job) -> Self {
        Self {
            listing_url: job.default_listing_url().to_string(),
            format: job.default_format(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_FEDERATIONS_URL.to_string(),
            output: None,
            format: OutputFormat::Text,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            locale: Locale::En,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
