//! Record assembly: one uniform record per detail page.

mod schema;

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::error_handling::{ErrorType, ProcessingStats, WarningType};
use crate::extract::{extract_field, extract_medals, FieldValue, MedalTally};
use crate::links::LinkEntry;
use crate::utils::{element_text, parse_selector, parse_selector_unsafe};

pub use schema::{display_name, Schema, SectionLocator, SectionSpec};

static CONTAINER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("section, article, div", "CONTAINER_SELECTOR"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordEntry {
    pub section: String,
    pub field: String,
    pub value: FieldValue,
}

/// Everything extracted from one detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub url: String,
    /// One entry per schema field, in schema order.
    pub entries: Vec<RecordEntry>,
    pub medals: Option<MedalTally>,
}

/// Applies `schema` to a parsed detail page.
///
/// Never fails: a section that cannot be located, a field no strategy finds
/// and a field whose spec is malformed all become [`FieldValue::Missing`].
/// Malformed specs are logged with the page URL and field label.
pub fn assemble(
    document: &Html,
    entry: &LinkEntry,
    schema: &Schema,
    stats: &ProcessingStats,
) -> Record {
    let mut entries = Vec::with_capacity(schema.field_count());

    for section in &schema.sections {
        let scope = locate_section(document, &section.locator);
        if scope.is_none() {
            log::warn!("{}: section '{}' not found", entry.url, section.title);
            stats.increment_warning(WarningType::SectionNotFound);
        }

        for field in &section.fields {
            let value = match scope {
                None => FieldValue::Missing,
                Some(scope) => match extract_field(scope, field) {
                    Ok(value) => {
                        if value.is_missing() {
                            log::debug!(
                                "{}: no value for '{}' in '{}'",
                                entry.url,
                                field.label,
                                section.title
                            );
                            stats.increment_warning(WarningType::FieldNotFound);
                        }
                        value
                    }
                    Err(e) => {
                        log::error!("{}: field '{}' skipped: {}", entry.url, field.label, e);
                        stats.increment_error(ErrorType::MalformedInput);
                        FieldValue::Missing
                    }
                },
            };
            entries.push(RecordEntry {
                section: section.title.clone(),
                field: field.name.clone(),
                value,
            });
        }
    }

    let medals = schema
        .medals
        .then(|| extract_medals(document.root_element(), stats));

    Record {
        name: entry.display_name.clone(),
        url: entry.url.clone(),
        entries,
        medals,
    }
}

/// Finds the section subtree described by `locator`.
///
/// The element with the locator's id wins. Otherwise the innermost
/// `section`, `article` or `div` whose text contains the phrase
/// (case-insensitively) and something besides it.
pub fn locate_section<'a>(document: &'a Html, locator: &SectionLocator) -> Option<ElementRef<'a>> {
    if let Some(id) = locator.id.as_deref().filter(|id| !id.is_empty()) {
        let by_id = parse_selector(&format!("[id=\"{}\"]", id.replace('"', "\\\"")))
            .map_err(|e| log::warn!("Unusable section id '{}': {}", id, e))
            .ok()
            .and_then(|selector| document.select(&selector).next());
        if by_id.is_some() {
            return by_id;
        }
    }

    let phrase = locator.phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }

    let candidates: Vec<ElementRef<'a>> = document
        .select(&CONTAINER_SELECTOR)
        .filter(|container| {
            let text = element_text(*container).to_lowercase();
            text.contains(&phrase) && text.chars().count() > phrase.chars().count()
        })
        .collect();
    let ids: HashSet<_> = candidates.iter().map(|c| c.id()).collect();

    candidates
        .into_iter()
        .find(|c| !c.descendants().skip(1).any(|node| ids.contains(&node.id())))
}
