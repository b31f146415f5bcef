//! Olympedia per-edition result tables.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::extract::Medal;
use crate::utils::{element_text, parse_selector_unsafe};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("table tr", "ROW_SELECTOR"));
static SPORT_HEADER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h2", "SPORT_HEADER_SELECTOR"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("td", "CELL_SELECTOR"));
static ATHLETE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a", "ATHLETE_SELECTOR"));

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("YEAR_RE is a valid pattern"));

const UNKNOWN_YEAR: &str = "Unknown";
const ATHLETE_SEPARATOR: &str = " • ";

/// One athlete (or team) result at one edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub year: String,
    pub athletes: String,
    pub sport: String,
    pub discipline: String,
    pub place: String,
    /// `None` for results without a medal.
    pub medal: Option<Medal>,
}

/// First four-digit run in the page title, or `Unknown`.
pub fn year_from_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect::<String>())
        .and_then(|title| YEAR_RE.find(&title).map(|m| m.as_str().to_string()))
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// Reads every result row of an edition page.
///
/// Rows are visited in document order across all tables. A row holding an
/// `h2` names the sport for the rows after it. A row with at least four cells
/// is a result: discipline, athletes, place, medal. Linked names equal to or
/// containing `country` are dropped (team rows link the country itself); a
/// row left with no athletes is skipped.
pub fn parse_results(document: &Html, year: &str, country: &str) -> Vec<ResultRow> {
    let mut sport = String::new();
    let mut rows = Vec::new();

    for row in document.select(&ROW_SELECTOR) {
        if let Some(header) = row.select(&SPORT_HEADER_SELECTOR).next() {
            sport = element_text(header);
            continue;
        }

        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < 4 {
            continue;
        }

        let athletes: Vec<String> = cells[1]
            .select(&ATHLETE_SELECTOR)
            .map(element_text)
            .filter(|name| !name.is_empty() && !name.contains(country))
            .collect();
        if athletes.is_empty() {
            log::trace!("Skipping result row without athletes in '{}'", sport);
            continue;
        }

        rows.push(ResultRow {
            year: year.to_string(),
            athletes: athletes.join(ATHLETE_SEPARATOR),
            sport: sport.clone(),
            discipline: element_text(cells[0]),
            place: element_text(cells[2]),
            medal: Medal::parse(&element_text(cells[3])),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDITION_PAGE: &str = r#"<html><head><title>Kazakhstan at the 2012 Summer Olympics | Olympedia</title></head>
    <body><table>
        <tr><td colspan="4"><h2>Boxing</h2></td></tr>
        <tr>
            <td>Middleweight, Men</td>
            <td><a href="/athletes/1">Zhanibek Alimkhanuly</a></td>
            <td>=5</td>
            <td></td>
        </tr>
        <tr>
            <td>Light-Welterweight, Men</td>
            <td><a href="/athletes/2">Serik Sapiyev</a></td>
            <td>1</td>
            <td><span class="Gold">Gold</span></td>
        </tr>
        <tr><td colspan="4"><h2>Cycling Road</h2></td></tr>
        <tr>
            <td>Road Race, Men</td>
            <td><a href="/athletes/3">Aleksandr Vinokurov</a></td>
            <td>1</td>
            <td>Gold</td>
        </tr>
        <tr>
            <td>Team Sprint, Men</td>
            <td><a href="/countries/KAZ">Kazakhstan</a></td>
            <td>9</td>
            <td></td>
        </tr>
        <tr><td>Short</td><td><a href="/athletes/4">Nobody</a></td></tr>
    </table>
    <table>
        <tr><td colspan="4"><h2>Weightlifting</h2></td></tr>
        <tr>
            <td>Lightweight, Women</td>
            <td><a href="/countries/KAZ">Kazakhstan</a> <a href="/athletes/5">Zulfiya Chinshanlo</a> <a href="/athletes/6">Maiya Maneza</a></td>
            <td>2</td>
            <td>Silver</td>
        </tr>
    </table></body></html>"#;

    #[test]
    fn test_year_from_title() {
        let document = Html::parse_document(EDITION_PAGE);
        assert_eq!(year_from_title(&document), "2012");

        let untitled = Html::parse_document("<html><head><title>Olympedia</title></head></html>");
        assert_eq!(year_from_title(&untitled), "Unknown");

        let no_title = Html::parse_document("<p>1996</p>");
        assert_eq!(year_from_title(&no_title), "Unknown");
    }

    #[test]
    fn test_parse_results_rows() {
        let document = Html::parse_document(EDITION_PAGE);
        let rows = parse_results(&document, "2012", "Kazakhstan");

        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            ResultRow {
                year: "2012".to_string(),
                athletes: "Zhanibek Alimkhanuly".to_string(),
                sport: "Boxing".to_string(),
                discipline: "Middleweight, Men".to_string(),
                place: "=5".to_string(),
                medal: None,
            }
        );
        assert_eq!(rows[1].medal, Some(Medal::Gold));
        assert_eq!(rows[2].sport, "Cycling Road");
        assert_eq!(rows[3].sport, "Weightlifting");
        assert_eq!(rows[3].athletes, "Zulfiya Chinshanlo • Maiya Maneza");
        assert_eq!(rows[3].medal, Some(Medal::Silver));
    }

    #[test]
    fn test_rows_before_any_sport_header() {
        let html = r#"<table><tr>
            <td>Marathon, Men</td><td><a href="/a/1">Runner</a></td><td>40</td><td>—</td>
        </tr></table>"#;
        let document = Html::parse_document(html);
        let rows = parse_results(&document, "Unknown", "Kazakhstan");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sport, "");
        assert_eq!(rows[0].medal, None);
    }
}
