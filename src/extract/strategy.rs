//! Extraction strategies, tried in declaration order by `extract_field`.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use super::label::LabelMatcher;
use super::FieldValue;
use crate::config::{PHONE_MAX_DIGITS, PHONE_MIN_DIGITS, PHONE_PATTERN};
use crate::error_handling::ExtractError;
use crate::utils::text::is_block_element;
use crate::utils::{element_text, parse_selector, parse_selector_unsafe};

const TEXT_BLOCK_SELECTOR_STR: &str =
    "p, li, dd, dt, td, th, div, span, address, h1, h2, h3, h4, h5, h6";
const ANCHOR_SELECTOR_STR: &str = "a[href]";

static TEXT_BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TEXT_BLOCK_SELECTOR_STR, "TEXT_BLOCK_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// A line that opens some `label:` pair, ending the scope of the one before.
static OTHER_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}[\p{L}\p{N} .\-/]*:").expect("OTHER_LABEL_RE is a valid pattern")
});

/// One way of locating a field's value inside a section.
#[derive(Debug, Clone)]
pub enum ExtractionStrategy {
    /// Person blocks: every `tag.class` descendant is read as a name plus a
    /// role; the first block whose role contains the field label as a whole
    /// word (and none of `exclude_labels`) yields its name.
    ByTagAndClass {
        tag: String,
        class: String,
        name_class: String,
        role_class: String,
        exclude_labels: Vec<String>,
    },
    /// Text blocks with a line starting `label:`; yields the text after the
    /// colon.
    ByLabeledParagraph { label: String },
    /// Lower confidence. First text block containing the field label as a
    /// whole word and none of `exclude_labels`; yields the text with the
    /// leading label removed.
    ByFreeTextScan { exclude_labels: Vec<String> },
    /// The first link in the section.
    ByFirstLink,
    /// Every match of `pattern` in the section, collected into a set.
    ///
    /// With `within_labels` only lines mentioning one of those labels are
    /// scanned, up to the next line that starts another `label:` pair. Lines
    /// opened by one of `exclude_labels` are skipped the same way.
    UnionOfMatches {
        pattern: Regex,
        within_labels: Vec<String>,
        exclude_labels: Vec<String>,
    },
}

impl ExtractionStrategy {
    pub fn tag_and_class(
        tag: &str,
        class: &str,
        name_class: &str,
        role_class: &str,
        exclude_labels: &[&str],
    ) -> Self {
        ExtractionStrategy::ByTagAndClass {
            tag: tag.to_string(),
            class: class.to_string(),
            name_class: name_class.to_string(),
            role_class: role_class.to_string(),
            exclude_labels: to_strings(exclude_labels),
        }
    }

    pub fn labeled_paragraph(label: &str) -> Self {
        ExtractionStrategy::ByLabeledParagraph {
            label: label.to_string(),
        }
    }

    pub fn free_text_scan(exclude_labels: &[&str]) -> Self {
        ExtractionStrategy::ByFreeTextScan {
            exclude_labels: to_strings(exclude_labels),
        }
    }

    /// Every phone number in the section, except on lines opened by one of
    /// `exclude_labels`.
    pub fn phone_numbers(exclude_labels: &[&str]) -> Self {
        ExtractionStrategy::UnionOfMatches {
            pattern: phone_pattern(),
            within_labels: Vec::new(),
            exclude_labels: to_strings(exclude_labels),
        }
    }

    /// Phone numbers on the lines labeled with one of `within_labels` only.
    pub fn labeled_phone_numbers(within_labels: &[&str]) -> Self {
        ExtractionStrategy::UnionOfMatches {
            pattern: phone_pattern(),
            within_labels: to_strings(within_labels),
            exclude_labels: Vec::new(),
        }
    }

    /// Short name used in debug logs.
    pub fn name(&self) -> &'static str {
        match self {
            ExtractionStrategy::ByTagAndClass { .. } => "tag_and_class",
            ExtractionStrategy::ByLabeledParagraph { .. } => "labeled_paragraph",
            ExtractionStrategy::ByFreeTextScan { .. } => "free_text_scan",
            ExtractionStrategy::ByFirstLink => "first_link",
            ExtractionStrategy::UnionOfMatches { .. } => "union_of_matches",
        }
    }

    /// Runs the strategy against `section`. `Ok(None)` means nothing found.
    pub fn apply(
        &self,
        section: ElementRef<'_>,
        label: &LabelMatcher,
    ) -> Result<Option<FieldValue>, ExtractError> {
        match self {
            ExtractionStrategy::ByTagAndClass {
                tag,
                class,
                name_class,
                role_class,
                exclude_labels,
            } => {
                let malformed = |reason: String| ExtractError::MalformedInput {
                    label: label.label().to_string(),
                    reason,
                };
                let block = parse_selector(&format!("{tag}.{class}")).map_err(malformed)?;
                let name = parse_selector(&format!(".{name_class}")).map_err(malformed)?;
                let role = parse_selector(&format!(".{role_class}")).map_err(malformed)?;
                let excluded = LabelMatcher::all(exclude_labels)?;
                Ok(by_tag_and_class(section, label, &block, &name, &role, &excluded))
            }
            ExtractionStrategy::ByLabeledParagraph { label: own_label } => {
                let matcher = LabelMatcher::new(own_label)?;
                Ok(text_blocks(section)
                    .find_map(|block| matcher.labeled_remainder(&element_text(block)))
                    .map(FieldValue::Text))
            }
            ExtractionStrategy::ByFreeTextScan { exclude_labels } => {
                let excluded = LabelMatcher::all(exclude_labels)?;
                Ok(by_free_text_scan(section, label, &excluded))
            }
            ExtractionStrategy::ByFirstLink => Ok(section
                .select(&ANCHOR_SELECTOR)
                .filter_map(|a| a.value().attr("href"))
                .map(str::trim)
                .find(|href| !href.is_empty() && *href != "#")
                .map(|href| FieldValue::Text(href.to_string()))),
            ExtractionStrategy::UnionOfMatches {
                pattern,
                within_labels,
                exclude_labels,
            } => {
                let scopes = LabelMatcher::all(within_labels)?;
                let excluded = LabelMatcher::all(exclude_labels)?;
                Ok(union_of_matches(section, pattern, &scopes, &excluded))
            }
        }
    }
}

fn phone_pattern() -> Regex {
    Regex::new(PHONE_PATTERN).expect("PHONE_PATTERN is a valid pattern")
}

fn to_strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

/// Text-bearing elements with no block-level element inside them, in
/// document order.
fn text_blocks<'a>(section: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    section.select(&TEXT_BLOCK_SELECTOR).filter(|block| {
        !block.descendants().skip(1).any(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| is_block_element(el.name()))
        })
    })
}

fn by_tag_and_class(
    section: ElementRef<'_>,
    label: &LabelMatcher,
    block: &Selector,
    name: &Selector,
    role: &Selector,
    excluded: &[LabelMatcher],
) -> Option<FieldValue> {
    section.select(block).find_map(|person| {
        let role_text = element_text(person.select(role).next()?);
        if !label.is_match(&role_text) || excluded.iter().any(|ex| ex.is_match(&role_text)) {
            return None;
        }
        let name_text = element_text(person.select(name).next()?);
        (!name_text.is_empty()).then_some(FieldValue::Text(name_text))
    })
}

fn by_free_text_scan(
    section: ElementRef<'_>,
    label: &LabelMatcher,
    excluded: &[LabelMatcher],
) -> Option<FieldValue> {
    text_blocks(section).find_map(|block| {
        let text = element_text(block);
        if !label.is_match(&text) || excluded.iter().any(|ex| ex.is_match(&text)) {
            return None;
        }
        let value = label.strip_leading(&text);
        if value.is_empty() {
            return None;
        }
        log::debug!(
            "Low-confidence free-text match for '{}': {:?}",
            label.label(),
            value
        );
        Some(FieldValue::Text(value))
    })
}

fn union_of_matches(
    section: ElementRef<'_>,
    pattern: &Regex,
    scopes: &[LabelMatcher],
    excluded: &[LabelMatcher],
) -> Option<FieldValue> {
    let text = element_text(section);
    let mut found = BTreeSet::new();
    let mut in_scope = scopes.is_empty();
    let mut skipping = false;

    for line in text.lines() {
        let opens_label = OTHER_LABEL_RE.is_match(line);
        if !scopes.is_empty() {
            if scopes.iter().any(|scope| scope.is_match(line)) {
                in_scope = true;
            } else if opens_label {
                in_scope = false;
            }
        }
        if excluded.iter().any(|ex| ex.opens(line)) {
            skipping = true;
        } else if opens_label {
            skipping = false;
        }
        if !in_scope || skipping {
            continue;
        }
        for candidate in pattern.find_iter(line) {
            found.extend(split_candidate(candidate.as_str()));
        }
    }

    (!found.is_empty()).then_some(FieldValue::Set(found))
}

fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

/// Turns one pattern match into phone numbers.
///
/// A match holding more than `PHONE_MAX_DIGITS` digits is several numbers
/// separated only by spaces. It is cut at a space so that the head is a
/// plausible number, preferring a cut where the next group starts with `+` or
/// repeats the first group (`8 727 ... 8 727 ...`), else the longest head.
/// Pieces shorter than `PHONE_MIN_DIGITS` digits are dropped.
fn split_candidate(candidate: &str) -> Vec<String> {
    let groups: Vec<&str> = candidate.split_whitespace().collect();
    let mut numbers = Vec::new();
    let mut rest = &groups[..];

    while !rest.is_empty() {
        let total = digit_count(&rest.join(""));
        if total < PHONE_MIN_DIGITS {
            break;
        }
        if total <= PHONE_MAX_DIGITS {
            numbers.push(rest.join(" "));
            break;
        }

        let mut head_digits = 0;
        let mut longest = None;
        let mut preferred = None;
        for cut in 1..rest.len() {
            head_digits += digit_count(rest[cut - 1]);
            if head_digits > PHONE_MAX_DIGITS {
                break;
            }
            if head_digits < PHONE_MIN_DIGITS {
                continue;
            }
            longest = Some(cut);
            if preferred.is_none() && (rest[cut].starts_with('+') || rest[cut] == rest[0]) {
                preferred = Some(cut);
            }
        }

        let Some(cut) = preferred.or(longest) else {
            break;
        };
        numbers.push(rest[..cut].join(" "));
        rest = &rest[cut..];
    }

    numbers
}
