//! Configuration constants.
//!
//! Default targets, timeouts and the fixed patterns the link collector and the
//! field extractor are configured with.

// Federation directory (olympic.kz)
pub const DEFAULT_FEDERATIONS_URL: &str = "https://olympic.kz/ru/federations";
/// Anchors on the federation listing that point at a federation page.
pub const FEDERATION_ITEM_SELECTOR: &str = "a.federations-list-item";
/// Headings on the federation listing holding the federation names.
pub const FEDERATION_NAME_SELECTOR: &str = "h3";

// Olympic results (olympedia.org)
pub const DEFAULT_RESULTS_URL: &str = "https://www.olympedia.org/countries/KAZ";
/// Substring identifying per-edition result pages on the country page.
pub const EDITION_LINK_MARKER: &str = "/countries/KAZ/editions/";
/// Country name filtered out of athlete cells (team entries link the country).
pub const RESULTS_COUNTRY_NAME: &str = "Kazakhstan";

// Network
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Pages fetched at once. 1 keeps the original strictly sequential behavior.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; federation_scrape/0.1)";

// Link filtering
/// Links containing any of these substrings are never visited.
pub const BLOCKED_LINK_DOMAINS: &[&str] = &["facebook.com", "instagram.com", "youtube.com"];
/// Email links that slipped into listing anchors: any `mailto:` link, or a bare
/// address with an optional query.
pub const EMAIL_PATTERN: &str =
    r"(?i)^mailto:|^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}(?:[?#]|$)";

// Field extraction
/// Phone and fax numbers: optional `+`, digits with spaces, dashes and parentheses.
/// Candidates are additionally required to hold 7 to 15 digits.
pub const PHONE_PATTERN: &str = r"\+?\(?\d[\d \t()\-\u{00A0}]{5,}\d";
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Values longer than this many characters are cut at their first newline.
///
/// This is a heuristic guard against a strategy capturing a whole block of
/// unrelated text. It can cut legitimately long multi-line values and it does
/// nothing for long single-line values.
pub const TRUNCATE_THRESHOLD_CHARS: usize = 50;
