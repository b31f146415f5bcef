//! Whole-word, case-insensitive label matching.

use regex::Regex;

use crate::error_handling::ExtractError;
use crate::utils::normalize_dashes;

/// Any dash between two parts of a label, with optional spaces around it.
const DASH_GAP: &str = r"[ \t]*[\-\x{2010}-\x{2014}\x{2212}][ \t]*";

/// Compiled matchers for one field label such as `Президент` or `Тел.`.
///
/// The label goes through [`normalize_dashes`] and each of its hyphens then
/// matches any dash with or without spaces, so `Вице – президент` and
/// `Вице-президент` are the same label. Matching never rewrites the text:
/// values come back exactly as the page has them. A word boundary is any
/// character that is not a letter or digit, which lets labels end in
/// punctuation (`Тел.`).
#[derive(Debug, Clone)]
pub struct LabelMatcher {
    label: String,
    word: Regex,
    opening: Regex,
    leading: Regex,
    labeled_line: Regex,
}

impl LabelMatcher {
    pub fn new(label: &str) -> Result<Self, ExtractError> {
        let normalized = normalize_dashes(label.trim());
        if normalized.is_empty() {
            return Err(ExtractError::MalformedInput {
                label: label.to_string(),
                reason: "label is empty".to_string(),
            });
        }

        let escaped = normalized
            .split('-')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(DASH_GAP);
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| ExtractError::MalformedInput {
                label: label.to_string(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            word: compile(format!(
                r"(?i)(?:^|[^\p{{L}}\p{{N}}]){escaped}(?:$|[^\p{{L}}\p{{N}}])"
            ))?,
            opening: compile(format!(r"(?i)^[ \t]*{escaped}(?:$|[^\p{{L}}\p{{N}}])"))?,
            leading: compile(format!(r"(?i)^\s*{escaped}\s*:?\s*"))?,
            labeled_line: compile(format!(r"(?im)^[ \t]*{escaped}[ \t]*:"))?,
            label: normalized,
        })
    }

    /// Builds matchers for a list of labels, failing on the first bad one.
    pub fn all(labels: &[String]) -> Result<Vec<Self>, ExtractError> {
        labels.iter().map(|label| Self::new(label)).collect()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// True if `text` contains the label as a whole word.
    pub fn is_match(&self, text: &str) -> bool {
        self.word.is_match(text)
    }

    /// True if `line` starts with the label as a whole word.
    pub fn opens(&self, line: &str) -> bool {
        self.opening.is_match(line)
    }

    /// Removes the label (and an optional colon) from the start of `text`.
    pub fn strip_leading(&self, text: &str) -> String {
        self.leading.replace(text, "").trim().to_string()
    }

    /// For text containing a line that starts with `label:`, returns
    /// everything after that colon, trimmed. `None` if there is no such line
    /// or nothing follows it.
    pub fn labeled_remainder(&self, text: &str) -> Option<String> {
        let found = self.labeled_line.find(text)?;
        let rest = text[found.end()..].trim();
        (!rest.is_empty()).then(|| rest.to_string())
    }
}
