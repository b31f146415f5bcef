//! Best-effort structured field extraction.
//!
//! A [`FieldSpec`] names a field, the label it is known by on the page and an
//! ordered list of [`ExtractionStrategy`] values. [`extract_field`] tries the
//! strategies in order against one section of a document and returns the first
//! non-empty result, or [`FieldValue::Missing`] when none finds anything.
//!
//! Missing data is never an error. The only failure is a spec that cannot be
//! interpreted at all (empty label, class names that do not form a selector).

mod label;
mod medals;
mod strategy;

use std::collections::BTreeSet;

use scraper::ElementRef;
use serde::Serialize;

use crate::config::TRUNCATE_THRESHOLD_CHARS;
use crate::error_handling::ExtractError;

pub use label::LabelMatcher;
pub use medals::{extract_medals, Medal, MedalTally};
pub use strategy::ExtractionStrategy;

/// Value of one field in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Several values of one kind (phone numbers); ordered and de-duplicated.
    Set(BTreeSet<String>),
    /// The page did not provide the field.
    Missing,
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Renders the value for text and CSV output, `sentinel` standing in for
    /// a missing value.
    pub fn render(&self, sentinel: &str) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Set(values) => values.iter().cloned().collect::<Vec<_>>().join(", "),
            FieldValue::Missing => sentinel.to_string(),
        }
    }
}

/// Normalization applied to a text value after extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Values longer than `max_chars` characters are cut at their first
    /// newline.
    ///
    /// Known limitation: this guards against capturing a whole block of
    /// unrelated text, but it also cuts long multi-line values that were
    /// legitimate, and it leaves long single-line captures untouched.
    TruncateAtNewline { max_chars: usize },
}

impl PostProcess {
    pub fn apply(self, value: String) -> String {
        match self {
            PostProcess::TruncateAtNewline { max_chars } => {
                if value.chars().count() <= max_chars {
                    return value;
                }
                match value.split_once('\n') {
                    Some((first, _)) => first.trim().to_string(),
                    None => value,
                }
            }
        }
    }
}

impl Default for PostProcess {
    fn default() -> Self {
        PostProcess::TruncateAtNewline {
            max_chars: TRUNCATE_THRESHOLD_CHARS,
        }
    }
}

/// Static description of one field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Column / display name.
    pub name: String,
    /// Label the page uses for the field, matched case-insensitively as a
    /// whole word.
    pub label: String,
    pub strategies: Vec<ExtractionStrategy>,
    pub postprocess: Option<PostProcess>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, strategies: Vec<ExtractionStrategy>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            strategies,
            postprocess: Some(PostProcess::default()),
        }
    }

    pub fn without_postprocess(mut self) -> Self {
        self.postprocess = None;
        self
    }
}

/// Applies `spec` to `section`: first strategy with a non-empty result wins.
///
/// # Errors
///
/// `ExtractError::MalformedInput` if the spec cannot be interpreted. The
/// caller decides what a failed field means for its record.
pub fn extract_field(section: ElementRef<'_>, spec: &FieldSpec) -> Result<FieldValue, ExtractError> {
    let label = LabelMatcher::new(&spec.label)?;

    for strategy in &spec.strategies {
        let Some(value) = strategy.apply(section, &label)? else {
            continue;
        };
        log::trace!("Field '{}' found by {}", spec.name, strategy.name());
        return Ok(match (value, spec.postprocess) {
            (FieldValue::Text(text), Some(post)) => FieldValue::Text(post.apply(text)),
            (value, _) => value,
        });
    }

    Ok(FieldValue::Missing)
}
