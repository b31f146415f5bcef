//! Job orchestration.
//!
//! Both jobs have the same shape: fetch one listing page, collect the detail
//! pages it points at, fetch those through a bounded pool, and stream what is
//! extracted from each into the output sink in listing order. A detail page
//! that cannot be fetched is logged, counted and skipped.

mod federations;
mod medals;

use std::time::Instant;

use log::info;

use crate::error_handling::ProcessingStats;

pub use federations::run_federations;
pub use medals::run_medals;

/// Results of a job run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Detail pages attempted
    pub total: usize,
    /// Pages fetched and processed
    pub succeeded: usize,
    /// Pages skipped after a fetch or parse failure
    pub failed: usize,
    /// Items written to the output (records or result rows)
    pub written: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Pool width for detail page fetches; zero is treated as one.
fn pool_width(max_concurrency: usize) -> usize {
    max_concurrency.max(1)
}

fn finish_run(
    start: Instant,
    total: usize,
    failed: usize,
    written: usize,
    stats: &ProcessingStats,
) -> RunReport {
    let report = RunReport {
        total,
        succeeded: total - failed,
        failed,
        written,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    };
    info!(
        "Processed {} pages in {:.2}s: {} succeeded, {} failed, {} items written",
        report.total, report.elapsed_seconds, report.succeeded, report.failed, report.written
    );
    stats.log_summary();
    report
}
