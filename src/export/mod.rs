//! Output sinks for scraped records and result rows.
//!
//! Items are written one at a time as the run produces them, in one of three
//! formats:
//! - Text: human-readable blocks for the console
//! - CSV: fixed header row, one row per item
//! - JSONL: one JSON object per line, for piping to `jq` or loading elsewhere

mod console;
mod csv;
mod jsonl;

use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{Locale, OutputFormat};
use crate::record::Record;
use crate::results::ResultRow;

pub use self::csv::{record_header, results_header};

/// Something the sinks know how to write.
pub trait Exportable: Serialize {
    /// Cells of the item's CSV row, matching the header the sink was built with.
    fn csv_fields(&self, locale: Locale) -> Vec<String>;

    /// Writes the human-readable rendering.
    fn write_text(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()>;
}

impl Exportable for Record {
    fn csv_fields(&self, locale: Locale) -> Vec<String> {
        self::csv::record_fields(self, locale)
    }

    fn write_text(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        console::write_record(out, self, locale)
    }
}

impl Exportable for ResultRow {
    fn csv_fields(&self, locale: Locale) -> Vec<String> {
        self::csv::result_fields(self, locale)
    }

    fn write_text(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        console::write_result_row(out, self, locale)
    }
}

/// Opens the output destination: the given file (created or truncated), or
/// stdout when `path` is `None` or `-`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(IgnoreBrokenPipe::new(io::stdout()))),
    }
}

enum Target {
    Text(Box<dyn Write + Send>),
    Csv(::csv::Writer<Box<dyn Write + Send>>),
    Jsonl(Box<dyn Write + Send>),
}

/// Streams items to a writer in the configured format.
pub struct OutputSink {
    target: Target,
    locale: Locale,
    written: usize,
}

impl OutputSink {
    /// Creates the sink. For CSV the `header` row is written immediately, so
    /// a run that yields no items still produces a valid file.
    pub fn new(
        writer: Box<dyn Write + Send>,
        format: OutputFormat,
        locale: Locale,
        header: &[String],
    ) -> Result<Self> {
        let target = match format {
            OutputFormat::Text => Target::Text(writer),
            OutputFormat::Jsonl => Target::Jsonl(writer),
            OutputFormat::Csv => {
                let mut csv_writer = ::csv::Writer::from_writer(writer);
                csv_writer
                    .write_record(header)
                    .context("Failed to write CSV header")?;
                Target::Csv(csv_writer)
            }
        };
        Ok(Self {
            target,
            locale,
            written: 0,
        })
    }

    pub fn write<T: Exportable>(&mut self, item: &T) -> Result<()> {
        match &mut self.target {
            Target::Text(out) => item
                .write_text(out.as_mut(), self.locale)
                .context("Failed to write text output")?,
            Target::Csv(writer) => writer
                .write_record(item.csv_fields(self.locale))
                .context("Failed to write CSV row")?,
            Target::Jsonl(out) => jsonl::write_line(out.as_mut(), item)?,
        }
        self.written += 1;
        Ok(())
    }

    /// Flushes the destination and returns the number of items written.
    pub fn finish(self) -> Result<usize> {
        let flushed = match self.target {
            Target::Text(mut out) | Target::Jsonl(mut out) => out.flush(),
            Target::Csv(mut writer) => writer.flush(),
        };
        flushed.context("Failed to flush output")?;
        Ok(self.written)
    }
}

/// Writer wrapper that ignores broken pipe errors (e.g. `| head`).
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}
