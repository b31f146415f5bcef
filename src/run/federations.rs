//! The federations job.

use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::{info, warn};
use scraper::Html;

use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::export::{open_output, record_header, OutputSink};
use crate::fetch::fetch_page;
use crate::initialization::init_client;
use crate::links::{collect_links, LinkEntry, LinkFilter, ListingLayout};
use crate::record::{assemble, Record, Schema};

use super::{finish_run, pool_width, RunReport};

/// Scrapes every federation on the listing page and writes one record per
/// federation.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the listing page cannot be
/// fetched or paired up, or the output cannot be written. Failures on single
/// federation pages are logged and skipped.
pub async fn run_federations(config: &Config) -> Result<RunReport> {
    let start = Instant::now();
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let stats = ProcessingStats::new();
    let schema = Schema::federation();

    let entries = collect_links(
        &client,
        &config.listing_url,
        &ListingLayout::default(),
        &LinkFilter::default(),
        &stats,
    )
    .await
    .context("Failed to collect federation links")?;
    info!("Found {} federations", entries.len());

    let writer = open_output(config.output.as_deref())?;
    let header = record_header(&schema, config.locale);
    let mut sink = OutputSink::new(writer, config.format, config.locale, &header)?;

    let client_ref = &client;
    let mut pages = stream::iter(entries.iter())
        .map(|entry| async move { (entry, fetch_page(client_ref, &entry.url).await) })
        .buffered(pool_width(config.max_concurrency));

    let mut failed = 0;
    while let Some((entry, body)) = pages.next().await {
        match body {
            Ok(body) => {
                let record = build_record(&body, entry, &schema, &stats);
                sink.write(&record)?;
            }
            Err(e) => {
                warn!("Skipping federation '{}': {}", entry.display_name, e);
                stats.increment_error(e.error_type());
                failed += 1;
            }
        }
    }

    let written = sink.finish()?;
    Ok(finish_run(start, entries.len(), failed, written, &stats))
}

/// Parses and assembles one page. Keeps the parsed document out of the async
/// state machine.
fn build_record(body: &str, entry: &LinkEntry, schema: &Schema, stats: &ProcessingStats) -> Record {
    info!("Parsing {}", entry.url);
    let document = Html::parse_document(body);
    assemble(&document, entry, schema, stats)
}
