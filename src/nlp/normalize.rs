//! Text normalization
//!
//! Produces the canonical form used for token counting: whitespace runs
//! collapsed, ASCII punctuation removed, lowercased.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

// `[:punct:]` is the ASCII punctuation class.
static PUNCTUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:punct:]]").expect("static regex compile"));

/// Normalize a document for token counting.
///
/// Collapses every whitespace run to a single space, strips ASCII punctuation,
/// then lowercases. Never fails; empty input yields an empty string.
pub fn preprocess(document: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(document, " ");
    let stripped = PUNCTUATION_RE.replace_all(&collapsed, "");
    stripped.to_lowercase()
}
