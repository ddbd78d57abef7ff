//! Output rendering
//!
//! Builds the two textual outputs of a summary: the full document with the
//! selected sentences wrapped in highlight markers, and the plain summary.

use super::selector::Selection;
use crate::types::{DuplicatePolicy, HighlightStyle, Sentence};

/// Render every sentence in document order, wrapping the selected ones.
///
/// Each sentence is followed by `separator`. Under
/// [`DuplicatePolicy::ByPosition`] a sentence is matched by position,
/// otherwise by its trimmed text, so every copy of a selected duplicate is
/// highlighted.
pub fn highlight(
    sentences: &[Sentence],
    selection: &Selection,
    policy: DuplicatePolicy,
    style: &HighlightStyle,
    separator: &str,
) -> String {
    let mut markup = String::new();

    for sentence in sentences {
        let selected = match policy {
            DuplicatePolicy::ByPosition => selection.contains_index(sentence.index),
            _ => selection.contains_text(sentence.text.trim()),
        };

        if selected {
            markup.push_str(&style.wrap(&sentence.text));
        } else {
            markup.push_str(&sentence.text);
        }
        markup.push_str(separator);
    }

    markup
}

/// Join the selected sentences in selection order
pub fn summary_text(selection: &Selection, separator: &str) -> String {
    selection
        .sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Remove highlight markers from a rendering produced with `separator`
///
/// Only a segment that both starts with `style.open` and ends with
/// `style.close` is unwrapped; marker text inside sentences is kept.
pub fn strip_highlights(markup: &str, style: &HighlightStyle, separator: &str) -> String {
    if separator.is_empty() {
        return unwrap_segment(markup, style).to_string();
    }

    markup
        .split(separator)
        .map(|segment| unwrap_segment(segment, style))
        .collect::<Vec<_>>()
        .join(separator)
}

fn unwrap_segment<'a>(segment: &'a str, style: &HighlightStyle) -> &'a str {
    segment
        .strip_prefix(style.open.as_str())
        .and_then(|inner| inner.strip_suffix(style.close.as_str()))
        .unwrap_or(segment)
}
