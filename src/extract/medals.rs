//! Olympic medal tallies.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use serde::Serialize;
use strum_macros::EnumIter;

use crate::config::Locale;
use crate::error_handling::{ProcessingStats, WarningType};
use crate::utils::{element_text, parse_selector_unsafe};

const MEDAL_ITEM_SELECTOR_STR: &str = "div.medals div.medals-item";
const MEDAL_NAME_SELECTOR_STR: &str = ".medals-item__name";
const MEDAL_COUNT_SELECTOR_STR: &str = ".medals-item__circle";

static MEDAL_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(MEDAL_ITEM_SELECTOR_STR, "MEDAL_ITEM_SELECTOR"));
static MEDAL_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(MEDAL_NAME_SELECTOR_STR, "MEDAL_NAME_SELECTOR"));
static MEDAL_COUNT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(MEDAL_COUNT_SELECTOR_STR, "MEDAL_COUNT_SELECTOR"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Recognizes a medal name in English or Russian, ignoring case and any
    /// surrounding text.
    pub fn parse(text: &str) -> Option<Medal> {
        let lower = text.to_lowercase();
        if lower.contains("gold") || lower.contains("золот") {
            Some(Medal::Gold)
        } else if lower.contains("silver") || lower.contains("серебр") {
            Some(Medal::Silver)
        } else if lower.contains("bronze") || lower.contains("бронз") {
            Some(Medal::Bronze)
        } else {
            None
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Medal::Gold, Locale::En) => "Gold",
            (Medal::Silver, Locale::En) => "Silver",
            (Medal::Bronze, Locale::En) => "Bronze",
            (Medal::Gold, Locale::Ru) => "Золото",
            (Medal::Silver, Locale::Ru) => "Серебро",
            (Medal::Bronze, Locale::Ru) => "Бронза",
        }
    }
}

/// Medal counts over the closed set Gold/Silver/Bronze. Every medal type is
/// always present; absent ones are zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalTally {
    pub fn get(&self, medal: Medal) -> u32 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    pub fn set(&mut self, medal: Medal, count: u32) {
        match medal {
            Medal::Gold => self.gold = count,
            Medal::Silver => self.silver = count,
            Medal::Bronze => self.bronze = count,
        }
    }
}

/// Reads the medal items (`div.medals div.medals-item`) under `scope`.
///
/// Each item holds a medal name and a count. Items with an unknown name or a
/// count that is not a number are logged, counted as
/// `WarningType::UnknownMedal` and skipped.
pub fn extract_medals(scope: ElementRef<'_>, stats: &ProcessingStats) -> MedalTally {
    let mut tally = MedalTally::default();

    for item in scope.select(&MEDAL_ITEM_SELECTOR) {
        let name = item
            .select(&MEDAL_NAME_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let count = item
            .select(&MEDAL_COUNT_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default();

        match (Medal::parse(&name), count.trim().parse::<u32>()) {
            (Some(medal), Ok(count)) => tally.set(medal, count),
            _ => {
                log::warn!("Skipping medal item with name {:?} and count {:?}", name, count);
                stats.increment_warning(WarningType::UnknownMedal);
            }
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;
    use strum::IntoEnumIterator;

    fn medal_item(name: &str, count: &str) -> String {
        format!(
            r#"<div class="medals-item"><div class="medals-item__name">{name}</div><div class="medals-item__circle">{count}</div></div>"#
        )
    }

    #[test]
    fn test_tally_is_total_over_medal_types() {
        let html = format!(
            r#"<html><body><div class="medals">{}</div></body></html>"#,
            medal_item("Золото", "3")
        );
        let document = Html::parse_document(&html);
        let stats = ProcessingStats::new();
        let tally = extract_medals(document.root_element(), &stats);

        assert_eq!(tally.get(Medal::Gold), 3);
        assert_eq!(tally.get(Medal::Silver), 0);
        assert_eq!(tally.get(Medal::Bronze), 0);
        assert_eq!(Medal::iter().count(), 3);
    }

    #[test]
    fn test_all_medals_and_unknown_items() {
        let html = format!(
            r#"<div class="medals">{}{}{}{}{}</div>"#,
            medal_item("Золото", "1"),
            medal_item("Серебро", " 4 "),
            medal_item("Bronze", "2"),
            medal_item("Участие", "7"),
            medal_item("Золото", "n/a"),
        );
        let document = Html::parse_document(&html);
        let stats = ProcessingStats::new();
        let tally = extract_medals(document.root_element(), &stats);

        assert_eq!(
            tally,
            MedalTally {
                gold: 1,
                silver: 4,
                bronze: 2
            }
        );
        assert_eq!(stats.get_warning_count(WarningType::UnknownMedal), 2);
    }

    #[test]
    fn test_no_medal_block_is_all_zero() {
        let document = Html::parse_document("<p>Нет медалей</p>");
        let stats = ProcessingStats::new();
        let tally = extract_medals(document.root_element(), &stats);
        assert_eq!(tally, MedalTally::default());
        assert_eq!(stats.total_warnings(), 0);
    }

    #[test]
    fn test_medal_parse_and_labels() {
        assert_eq!(Medal::parse("GOLD"), Some(Medal::Gold));
        assert_eq!(Medal::parse("Серебряная медаль"), Some(Medal::Silver));
        assert_eq!(Medal::parse("Бронза"), Some(Medal::Bronze));
        assert_eq!(Medal::parse("—"), None);
        assert_eq!(Medal::Gold.label(Locale::Ru), "Золото");
        assert_eq!(Medal::Bronze.label(Locale::En), "Bronze");
    }
}
