//! Text normalization for scraped elements.

use scraper::{ElementRef, Node};

/// Elements that start a new line when flattened to text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "li", "main", "nav", "ol", "p", "section", "table", "td",
    "th", "tr", "ul",
];

const DASHES: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2212}',
];

/// Returns true for tag names that render as their own line.
pub fn is_block_element(name: &str) -> bool {
    BLOCK_ELEMENTS.contains(&name)
}

/// Flattens an element to text.
///
/// `<br>` and block boundaries become line breaks; every line is trimmed with
/// inner whitespace collapsed to single spaces; blank lines are dropped. Script
/// and style contents are ignored.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                if name == "script" || name == "style" {
                    continue;
                }
                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = is_block_element(name);
                if block {
                    out.push('\n');
                }
                collect_text(child_ref, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Rewrites a dash between two words, with or without surrounding spaces, to
/// a plain hyphen: `Вице – президент` and `Вице-президент` both become
/// `Вице-президент`. Dashes next to digits are left alone.
pub fn normalize_dashes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == ' ' || c == '\t' || DASHES.contains(&c) {
            let mut j = i;
            while j < chars.len() && (chars[j] == ' ' || chars[j] == '\t') {
                j += 1;
            }
            if j < chars.len() && DASHES.contains(&chars[j]) {
                let mut k = j + 1;
                while k < chars.len() && (chars[k] == ' ' || chars[k] == '\t') {
                    k += 1;
                }
                let after_word = out.chars().last().is_some_and(char::is_alphabetic);
                let before_word = chars.get(k).is_some_and(|ch| ch.is_alphabetic());
                if after_word && before_word {
                    out.push('-');
                    i = k;
                    continue;
                }
            }
        }
        out.push(c);
        i += 1;
    }

    out
}
