//! Sentence segmentation and word tokenization
//!
//! Both collaborators sit behind traits so callers can plug in their own
//! segmenter or tokenizer. The built-in implementations are rule based:
//!
//! - [`RuleSegmenter`] splits on `.`, `!`, `?` (plus trailing quotes and
//!   brackets) followed by whitespace or end of text, and on blank lines.
//!   A lone `.` after a known abbreviation or a single capital initial
//!   (other than the pronoun `I`) is not a boundary.
//! - [`RuleTokenizer`] yields maximal alphanumeric runs, keeping an
//!   apostrophe or hyphen that sits between two alphanumeric characters.

use crate::types::Sentence;
use rustc_hash::FxHashSet;

/// Splits raw text into an ordered sequence of sentences.
pub trait SentenceSegmenter: Send + Sync {
    /// Segment `text`; sentences are trimmed and indexed in document order.
    fn segment(&self, text: &str) -> Vec<Sentence>;
}

/// Splits text into word tokens.
pub trait WordTokenizer: Send + Sync {
    /// Tokenize `text`, borrowing each word from the input.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "cf", "approx",
    "inc", "ltd", "corp", "fig", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec",
];

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

fn is_connector(c: char) -> bool {
    matches!(c, '\'' | '’' | '-')
}

// ============================================================================
// Sentence segmentation
// ============================================================================

/// Rule-based sentence boundary detector
#[derive(Debug, Clone)]
pub struct RuleSegmenter {
    /// Lowercase abbreviations (without the trailing period)
    abbreviations: FxHashSet<String>,
}

impl Default for RuleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSegmenter {
    /// Create a segmenter with the default English abbreviation list
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a segmenter that knows no abbreviations
    pub fn without_abbreviations() -> Self {
        Self {
            abbreviations: FxHashSet::default(),
        }
    }

    /// Add abbreviations (case-insensitive, trailing period optional)
    pub fn with_abbreviations(mut self, words: &[&str]) -> Self {
        for word in words {
            self.abbreviations
                .insert(word.trim_end_matches('.').to_lowercase());
        }
        self
    }

    /// Whether the period at `dot` closes an abbreviation or an initial
    fn ends_abbreviation(&self, text: &str, start: usize, dot: usize) -> bool {
        let word = text[start..dot]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        // A lone capital is an initial, except the pronoun "I".
        let mut chars = word.chars();
        if let (Some(first), None) = (chars.next(), chars.next()) {
            if first.is_uppercase() && first != 'I' {
                return true;
            }
        }

        !word.is_empty() && self.abbreviations.contains(&word.to_lowercase())
    }

    fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
        let slice = &text[start..end];
        let trimmed = slice.trim();
        if trimmed.is_empty() {
            return;
        }
        let offset = start + (slice.len() - slice.trim_start().len());
        let index = out.len();
        out.push(Sentence::new(trimmed, offset, offset + trimmed.len(), index));
    }
}

/// A blank line starts at the newline at `i`
fn is_paragraph_break(chars: &[(usize, char)], i: usize) -> bool {
    chars[i + 1..]
        .iter()
        .take_while(|(_, c)| c.is_whitespace())
        .any(|&(_, c)| c == '\n')
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if is_terminal(c) {
                let mut j = i + 1;
                while j < chars.len() && (is_terminal(chars[j].1) || is_closing(chars[j].1)) {
                    j += 1;
                }

                let at_end = j >= chars.len();
                let next_is_space = !at_end && chars[j].1.is_whitespace();
                let lone_period = c == '.' && j == i + 1;

                if (at_end || next_is_space)
                    && !(lone_period && self.ends_abbreviation(text, start, pos))
                {
                    let end = if at_end { text.len() } else { chars[j].0 };
                    Self::push_trimmed(text, start, end, &mut sentences);
                    start = end;
                }

                i = j;
                continue;
            }

            if c == '\n' && is_paragraph_break(&chars, i) {
                Self::push_trimmed(text, start, pos, &mut sentences);
                start = pos;
            }

            i += 1;
        }

        if start < text.len() {
            Self::push_trimmed(text, start, text.len(), &mut sentences);
        }

        sentences
    }
}

// ============================================================================
// Word tokenization
// ============================================================================

/// Rule-based word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTokenizer;

impl WordTokenizer for RuleTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();
        let mut start: Option<usize> = None;
        let mut end = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if c.is_alphanumeric() {
                if start.is_none() {
                    start = Some(i);
                }
                end = i + c.len_utf8();
            } else if start.is_some()
                && is_connector(c)
                && chars.peek().is_some_and(|&(_, next)| next.is_alphanumeric())
            {
                end = i + c.len_utf8();
            } else if let Some(s) = start.take() {
                words.push(&text[s..end]);
            }
        }

        if let Some(s) = start {
            words.push(&text[s..end]);
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_splits_basic_sentences() {
        let sentences = RuleSegmenter::new().segment("A cat sat. A cat ran fast. Dogs bark loudly.");
        assert_eq!(
            texts(&sentences),
            vec!["A cat sat.", "A cat ran fast.", "Dogs bark loudly."]
        );
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  First one!  Second one?\tThird";
        let sentences = RuleSegmenter::new().segment(text);
        assert_eq!(texts(&sentences), vec!["First one!", "Second one?", "Third"]);
        for s in &sentences {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_trailing_quotes_stay_with_sentence() {
        let text = "He said \"stop.\" Then he left.";
        let sentences = RuleSegmenter::new().segment(text);
        assert_eq!(texts(&sentences), vec!["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn test_abbreviations_and_initials() {
        let text = "Dr. Smith met J. Doe at noon. They talked.";
        let sentences = RuleSegmenter::new().segment(text);
        assert_eq!(
            texts(&sentences),
            vec!["Dr. Smith met J. Doe at noon.", "They talked."]
        );

        let plain = RuleSegmenter::without_abbreviations().segment("Dr. Smith left.");
        assert_eq!(texts(&plain), vec!["Dr.", "Smith left."]);
    }

    #[test]
    fn test_pronoun_i_ends_sentence() {
        let text = "Nobody came but I. Then we left the empty hall.";
        let sentences = RuleSegmenter::new().segment(text);
        assert_eq!(
            texts(&sentences),
            vec!["Nobody came but I.", "Then we left the empty hall."]
        );

        let initials = RuleSegmenter::new().segment("Letters from H. G. Wells arrived. We read them.");
        assert_eq!(
            texts(&initials),
            vec!["Letters from H. G. Wells arrived.", "We read them."]
        );
    }

    #[test]
    fn test_custom_abbreviation() {
        let seg = RuleSegmenter::without_abbreviations().with_abbreviations(&["Approx."]);
        let sentences = seg.segment("It weighs approx. two kilos. Heavy.");
        assert_eq!(texts(&sentences), vec!["It weighs approx. two kilos.", "Heavy."]);
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        let sentences = RuleSegmenter::new().segment("Pi is 3.14 roughly. Yes.");
        assert_eq!(texts(&sentences), vec!["Pi is 3.14 roughly.", "Yes."]);
    }

    #[test]
    fn test_blank_line_is_boundary() {
        let text = "Heading without stop\n\nBody text here. More body.";
        let sentences = RuleSegmenter::new().segment(text);
        assert_eq!(
            texts(&sentences),
            vec!["Heading without stop", "Body text here.", "More body."]
        );
    }

    #[test]
    fn test_single_newline_is_not_boundary() {
        let sentences = RuleSegmenter::new().segment("one line\ncontinues here.");
        assert_eq!(texts(&sentences), vec!["one line\ncontinues here."]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(RuleSegmenter::new().segment("").is_empty());
        assert!(RuleSegmenter::new().segment(" \n\n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_words() {
        let words = RuleTokenizer.tokenize("Natural language processing (NLP) refers to AI.");
        assert_eq!(
            words,
            vec!["Natural", "language", "processing", "NLP", "refers", "to", "AI"]
        );
    }

    #[test]
    fn test_tokenize_keeps_inner_connectors() {
        let words = RuleTokenizer.tokenize("don't re-use speech-to-text -- 'quoted' there’s");
        assert_eq!(
            words,
            vec!["don't", "re-use", "speech-to-text", "quoted", "there’s"]
        );
    }

    #[test]
    fn test_tokenize_numbers_and_unicode() {
        let words = RuleTokenizer.tokenize("70% of café users, 2024!");
        assert_eq!(words, vec!["70", "of", "café", "users", "2024"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(RuleTokenizer.tokenize("").is_empty());
        assert!(RuleTokenizer.tokenize("... !!").is_empty());
    }

    #[test]
    fn test_tokenizer_as_trait_object() {
        let tokenizer: Box<dyn WordTokenizer> = Box::new(RuleTokenizer);
        assert_eq!(tokenizer.tokenize("a b").len(), 2);
    }
}
