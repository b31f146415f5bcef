//! The medals job: every edition a country took part in, one row per result.

use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::{info, warn};
use scraper::Html;
use url::Url;

use crate::config::{Config, EDITION_LINK_MARKER, RESULTS_COUNTRY_NAME};
use crate::error_handling::ProcessingStats;
use crate::export::{open_output, results_header, OutputSink};
use crate::fetch::fetch_page;
use crate::initialization::init_client;
use crate::links::collect_edition_links;
use crate::results::{parse_results, year_from_title, ResultRow};

use super::{finish_run, pool_width, RunReport};

/// Scrapes the country results page and writes every result row of every
/// edition it links to.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the country page cannot be
/// fetched, or the output cannot be written. Failures on single edition pages
/// are logged and skipped.
pub async fn run_medals(config: &Config) -> Result<RunReport> {
    let start = Instant::now();
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let stats = ProcessingStats::new();

    let base = Url::parse(&config.listing_url)
        .with_context(|| format!("Invalid results URL: {}", config.listing_url))?;
    let country_page = fetch_page(&client, &config.listing_url)
        .await
        .context("Failed to fetch country results page")?;
    let editions = edition_links(&country_page, &base);
    info!("Found {} Olympic editions", editions.len());

    let writer = open_output(config.output.as_deref())?;
    let header = results_header(config.locale);
    let mut sink = OutputSink::new(writer, config.format, config.locale, &header)?;

    let client_ref = &client;
    let mut pages = stream::iter(editions.iter())
        .map(|url| async move { (url, fetch_page(client_ref, url).await) })
        .buffered(pool_width(config.max_concurrency));

    let mut failed = 0;
    while let Some((url, body)) = pages.next().await {
        match body {
            Ok(body) => {
                for row in edition_rows(&body, url) {
                    sink.write(&row)?;
                }
            }
            Err(e) => {
                warn!("Skipping edition {}: {}", url, e);
                stats.increment_error(e.error_type());
                failed += 1;
            }
        }
    }

    let written = sink.finish()?;
    Ok(finish_run(start, editions.len(), failed, written, &stats))
}

fn edition_links(body: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(body);
    collect_edition_links(&document, base, EDITION_LINK_MARKER)
}

fn edition_rows(body: &str, url: &str) -> Vec<ResultRow> {
    info!("Parsing {url}");
    let document = Html::parse_document(body);
    let year = year_from_title(&document);
    parse_results(&document, &year, RESULTS_COUNTRY_NAME)
}
