//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default targets, timeouts, fixed patterns)
//! - CLI value enums and the library `Config`
//! - The clap command-line definition

mod cli;
mod constants;
mod types;

pub use cli::{Cli, Command, JobArgs};
pub use constants::*;
pub use types::{Config, Job, Locale, LogFormat, LogLevel, OutputFormat};
