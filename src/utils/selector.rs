//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector built at runtime from configuration.
///
/// Returns the parser's message on failure so callers can attach the field or
/// page context they are working on.
pub fn parse_selector(selector_str: &str) -> Result<Selector, String> {
    Selector::parse(selector_str)
        .map_err(|e| format!("invalid CSS selector '{}': {}", selector_str, e))
}

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
