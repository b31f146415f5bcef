//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`ScrapeError`, `ExtractError`, `InitializationError`)
//! - Processing statistics tracking (errors and warnings)
//!
//! Error types are categorized into:
//! - **Errors**: Failures that skip a page or a single field
//! - **Warnings**: Missing data that resolves to the "no information" sentinel

mod stats;
mod types;

pub use stats::ProcessingStats;
pub use types::{ErrorType, ExtractError, InitializationError, ScrapeError, WarningType};
