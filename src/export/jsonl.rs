//! JSONL (JSON Lines) output.
//!
//! Each line is one complete JSON object. Missing values are `null` and the
//! fixed strings stay untranslated, so the output does not depend on the
//! locale.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

pub(super) fn write_line<T: Serialize>(out: &mut dyn Write, item: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, item).context("Failed to serialize JSON line")?;
    out.write_all(b"\n").context("Failed to write JSON line")?;
    Ok(())
}
