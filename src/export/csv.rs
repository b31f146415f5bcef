//! CSV headers and rows.
//!
//! Federation records flatten to one row: name, URL, one column per schema
//! field, then the medal counts. Result rows map one-to-one onto columns.

use strum::IntoEnumIterator;

use crate::config::Locale;
use crate::extract::Medal;
use crate::record::{Record, Schema};
use crate::results::ResultRow;

/// Header for federation records built from `schema`.
pub fn record_header(schema: &Schema, locale: Locale) -> Vec<String> {
    let (federation, url) = match locale {
        Locale::En => ("Federation", "URL"),
        Locale::Ru => ("Федерация", "Ссылка"),
    };
    let mut header = vec![federation.to_string(), url.to_string()];
    header.extend(schema.column_names(locale));
    if schema.medals {
        header.extend(Medal::iter().map(|medal| medal.label(locale).to_string()));
    }
    header
}

/// Header for result rows.
pub fn results_header(locale: Locale) -> Vec<String> {
    let columns: [&str; 6] = match locale {
        Locale::En => ["Year", "Athlete(s)", "Sport", "Discipline", "Place", "Medal"],
        Locale::Ru => [
            "Год",
            "Атлет(ы)",
            "Вид спорта",
            "Дисциплина",
            "Место",
            "Медаль",
        ],
    };
    columns.iter().map(|c| c.to_string()).collect()
}

pub(super) fn record_fields(record: &Record, locale: Locale) -> Vec<String> {
    let mut fields = vec![record.name.clone(), record.url.clone()];
    fields.extend(
        record
            .entries
            .iter()
            .map(|entry| entry.value.render(locale.sentinel())),
    );
    if let Some(tally) = &record.medals {
        fields.extend(Medal::iter().map(|medal| tally.get(medal).to_string()));
    }
    fields
}

pub(super) fn result_fields(row: &ResultRow, locale: Locale) -> Vec<String> {
    vec![
        row.year.clone(),
        row.athletes.clone(),
        row.sport.clone(),
        row.discipline.clone(),
        row.place.clone(),
        row.medal
            .map_or(locale.no_medal(), |m| m.label(locale))
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_header_en() {
        assert_eq!(
            results_header(Locale::En),
            vec!["Year", "Athlete(s)", "Sport", "Discipline", "Place", "Medal"]
        );
    }

    #[test]
    fn test_record_header_ru_localizes_fixed_columns() {
        let header = record_header(&Schema::federation(), Locale::Ru);
        assert_eq!(header[0], "Федерация");
        assert!(header.ends_with(&[
            "Золото".to_string(),
            "Серебро".to_string(),
            "Бронза".to_string()
        ]));
    }

    #[test]
    fn test_record_header_without_medals() {
        let schema = Schema {
            medals: false,
            ..Schema::federation()
        };
        let header = record_header(&schema, Locale::En);
        assert_eq!(header.len(), 2 + schema.field_count());
    }
}
