//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures retrieving or interpreting a whole page.
///
/// Page-level failures skip that page; only `LinkMismatch` on the listing page
/// stops a job.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network failure, timeout or unreadable body.
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The body could not be used as a document.
    #[error("Could not parse {url}: {reason}")]
    Parse { url: String, reason: String },

    /// Listing page headings and item links do not pair up by position.
    #[error("Listing page has {names} names but {links} links; refusing to pair them by position")]
    LinkMismatch { names: usize, links: usize },
}

impl ScrapeError {
    /// Maps the error onto its statistics bucket.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ScrapeError::Fetch { source, .. } if source.is_timeout() => ErrorType::TimeoutError,
            ScrapeError::Fetch { .. } => ErrorType::FetchError,
            ScrapeError::HttpStatus { .. } => ErrorType::HttpStatusError,
            ScrapeError::Parse { .. } => ErrorType::ParseError,
            ScrapeError::LinkMismatch { .. } => ErrorType::LinkMismatch,
        }
    }
}

/// Errors from a single field extraction call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The field specification cannot be interpreted at all.
    #[error("Malformed field spec for '{label}': {reason}")]
    MalformedInput { label: String, reason: String },
}

/// Types of errors that can occur while processing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    FetchError,
    TimeoutError,
    HttpStatusError,
    ParseError,
    LinkMismatch,
    MalformedInput,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::FetchError => "Fetch error",
            ErrorType::TimeoutError => "Request timeout",
            ErrorType::HttpStatusError => "HTTP status error",
            ErrorType::ParseError => "Parse error",
            ErrorType::LinkMismatch => "Listing name/link mismatch",
            ErrorType::MalformedInput => "Malformed field spec",
        }
    }
}

/// Types of warnings: data the page did not provide.
///
/// None of these abort a record; they resolve to the sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    FieldNotFound,
    SectionNotFound,
    UnknownMedal,
    SkippedLink,
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::FieldNotFound => "Field not found",
            WarningType::SectionNotFound => "Section not found",
            WarningType::UnknownMedal => "Unknown medal entry",
            WarningType::SkippedLink => "Invalid link skipped",
        }
    }
}
