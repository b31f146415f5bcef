//! Link collection from listing pages.
//!
//! The federation directory lists one anchor per federation and, separately,
//! one heading per federation name. The two are paired by position, so the
//! counts are checked before pairing and a mismatch stops the job instead of
//! attaching names to the wrong pages.

mod filter;

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;
use url::Url;

use crate::config::{FEDERATION_ITEM_SELECTOR, FEDERATION_NAME_SELECTOR};
use crate::error_handling::{ProcessingStats, ScrapeError, WarningType};
use crate::fetch::fetch_page;
use crate::utils::{element_text, parse_selector, parse_selector_unsafe};

pub use filter::{is_invalid_link, LinkFilter};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));

/// A detail page to visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub display_name: String,
    pub url: String,
}

/// Where names and links live on a listing page.
#[derive(Debug, Clone)]
pub struct ListingLayout {
    /// Anchors pointing at detail pages.
    pub item_selector: String,
    /// Elements holding the display names, in the same order as the anchors.
    pub name_selector: String,
}

impl Default for ListingLayout {
    fn default() -> Self {
        Self {
            item_selector: FEDERATION_ITEM_SELECTOR.to_string(),
            name_selector: FEDERATION_NAME_SELECTOR.to_string(),
        }
    }
}

/// Fetches the listing page and returns the detail pages to visit, in
/// document order.
///
/// # Errors
///
/// Any fetch failure for the listing page itself, an unusable layout, or a
/// name/link count mismatch.
pub async fn collect_links(
    client: &reqwest::Client,
    listing_url: &str,
    layout: &ListingLayout,
    filter: &LinkFilter,
    stats: &ProcessingStats,
) -> Result<Vec<LinkEntry>, ScrapeError> {
    let base = Url::parse(listing_url).map_err(|e| ScrapeError::Parse {
        url: listing_url.to_string(),
        reason: format!("invalid listing URL: {e}"),
    })?;
    let body = fetch_page(client, listing_url).await?;
    let document = Html::parse_document(&body);
    parse_listing(&document, &base, layout, filter, stats)
}

/// Pairs names with links on an already parsed listing page.
///
/// Relative links are resolved against `base`. Pairs whose link is missing,
/// unresolvable or invalid per `filter` are dropped after pairing, so the
/// remaining entries keep their document order.
pub fn parse_listing(
    document: &Html,
    base: &Url,
    layout: &ListingLayout,
    filter: &LinkFilter,
    stats: &ProcessingStats,
) -> Result<Vec<LinkEntry>, ScrapeError> {
    let layout_error = |reason: String| ScrapeError::Parse {
        url: base.to_string(),
        reason,
    };
    let item_selector = parse_selector(&layout.item_selector).map_err(layout_error)?;
    let name_selector = parse_selector(&layout.name_selector).map_err(layout_error)?;

    let names: Vec<String> = document.select(&name_selector).map(element_text).collect();
    let hrefs: Vec<Option<&str>> = document
        .select(&item_selector)
        .map(|anchor| anchor.value().attr("href"))
        .collect();

    if names.len() != hrefs.len() {
        return Err(ScrapeError::LinkMismatch {
            names: names.len(),
            links: hrefs.len(),
        });
    }

    let mut entries = Vec::with_capacity(hrefs.len());
    for (display_name, href) in names.into_iter().zip(hrefs) {
        let Some(href) = href.map(str::trim).filter(|h| !h.is_empty()) else {
            log::warn!("Skipping '{}': listing item has no link", display_name);
            stats.increment_warning(WarningType::SkippedLink);
            continue;
        };
        if filter.is_invalid_link(href) {
            log::debug!("Skipping invalid link for '{}': {}", display_name, href);
            stats.increment_warning(WarningType::SkippedLink);
            continue;
        }
        match base.join(href) {
            Ok(url) if !filter.is_invalid_link(url.as_str()) => entries.push(LinkEntry {
                display_name,
                url: url.to_string(),
            }),
            Ok(url) => {
                log::debug!("Skipping invalid link for '{}': {}", display_name, url);
                stats.increment_warning(WarningType::SkippedLink);
            }
            Err(e) => {
                log::warn!("Skipping unresolvable link '{}': {}", href, e);
                stats.increment_warning(WarningType::SkippedLink);
            }
        }
    }

    Ok(entries)
}

/// All links on `document` whose href contains `marker`, resolved against
/// `base`, without duplicates, in document order.
pub fn collect_edition_links(document: &Html, base: &Url, marker: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.contains(marker))
        .filter_map(|href| base.join(href.trim()).ok())
        .map(|url| url.to_string())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
