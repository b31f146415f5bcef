//! Human-readable console rendering.

use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::config::Locale;
use crate::extract::Medal;
use crate::record::{display_name, Record};
use crate::results::ResultRow;

const RECORD_SEPARATOR: &str = "------------";

fn federation_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Federation",
        Locale::Ru => "Федерация",
    }
}

fn medals_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Olympic medals",
        Locale::Ru => "Олимпийские медали",
    }
}

/// Multi-line values continue indented under their field.
fn indent_continuation(value: &str) -> String {
    value.replace('\n', "\n    ")
}

pub(super) fn write_record(out: &mut dyn Write, record: &Record, locale: Locale) -> io::Result<()> {
    writeln!(out, "{RECORD_SEPARATOR}")?;
    writeln!(out, "{}: {}", federation_label(locale), record.name)?;
    writeln!(out, "URL: {}", record.url)?;

    let mut current_section: Option<&str> = None;
    for entry in &record.entries {
        if current_section != Some(entry.section.as_str()) {
            writeln!(out, "{}:", display_name(&entry.section, locale))?;
            current_section = Some(entry.section.as_str());
        }
        let value = entry.value.render(locale.sentinel());
        writeln!(
            out,
            "  {}: {}",
            display_name(&entry.field, locale),
            indent_continuation(&value)
        )?;
    }

    if let Some(tally) = &record.medals {
        writeln!(out, "{}:", medals_label(locale))?;
        for medal in Medal::iter() {
            writeln!(out, "  {}: {}", medal.label(locale), tally.get(medal))?;
        }
    }
    Ok(())
}

pub(super) fn write_result_row(
    out: &mut dyn Write,
    row: &ResultRow,
    locale: Locale,
) -> io::Result<()> {
    let medal = row.medal.map_or(locale.no_medal(), |m| m.label(locale));
    writeln!(
        out,
        "{} | {} | {} | {} | {} | {}",
        row.year, row.athletes, row.sport, row.discipline, row.place, medal
    )
}
