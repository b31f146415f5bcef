//! Link validity filtering.

use regex::Regex;

use crate::config::{BLOCKED_LINK_DOMAINS, EMAIL_PATTERN};

/// Rules for links that must never be visited.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    /// Substrings (social media domains) that disqualify a link.
    pub blocked_domains: Vec<String>,
    /// Bare email addresses.
    pub email: Regex,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            blocked_domains: BLOCKED_LINK_DOMAINS.iter().map(|d| d.to_string()).collect(),
            email: Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid pattern"),
        }
    }
}

impl LinkFilter {
    /// True if `url` contains a blocked domain, ends with `#`, or is an email
    /// address. Pure: no network, no state.
    pub fn is_invalid_link(&self, url: &str) -> bool {
        let url = url.trim();
        self.blocked_domains
            .iter()
            .any(|domain| url.contains(domain.as_str()))
            || url.ends_with('#')
            || self.email.is_match(url)
    }
}

/// [`LinkFilter::is_invalid_link`] with the default blocklist.
pub fn is_invalid_link(url: &str) -> bool {
    LinkFilter::default().is_invalid_link(url)
}
