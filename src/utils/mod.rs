//! Shared helpers.
//!
//! - CSS selector parsing
//! - Whitespace and dash normalization of element text

mod selector;
pub mod text;

pub use selector::{parse_selector, parse_selector_unsafe};
pub use text::{element_text, normalize_dashes};
