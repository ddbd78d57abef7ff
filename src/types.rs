//! Core types for rapid_summarize
//!
//! This module defines the data structures shared by the summarization stages:
//! sentences, scored sentences, and the summarizer configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

// ============================================================================
// Scored sentence
// ============================================================================

/// A sentence together with its accumulated relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// The sentence text
    pub text: String,
    /// Sum of the token weights of every word in the sentence
    pub score: f64,
    /// Index of the first occurrence of this sentence in the document
    pub index: usize,
    /// Number of times this exact sentence text occurs in the document
    pub occurrences: usize,
}

impl ScoredSentence {
    /// Create a new scored sentence with a single occurrence
    pub fn new(text: impl Into<String>, score: f64, index: usize) -> Self {
        Self {
            text: text.into(),
            score,
            index,
            occurrences: 1,
        }
    }

    /// Stable tie-breaker comparator for deterministic sentence ranking.
    ///
    /// 1. **Score** descending (scores within `SCORE_EPSILON` are tied)
    /// 2. **Earliest first occurrence** ascending
    /// 3. **Text** lexicographic ascending
    pub fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
        /// Two scores within this epsilon are considered tied.
        const SCORE_EPSILON: f64 = 1e-10;

        let score_diff = self.score - other.score;
        if score_diff.abs() > SCORE_EPSILON {
            return if score_diff > 0.0 {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            };
        }

        self.index
            .cmp(&other.index)
            .then_with(|| self.text.cmp(&other.text))
    }
}

// ============================================================================
// Duplicate handling
// ============================================================================

/// How sentences whose text occurs more than once are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Repeated occurrences add their scores into a single entry
    #[default]
    Accumulate,
    /// Only the first occurrence is scored; repeats are ignored
    FirstOccurrence,
    /// Every occurrence is its own entry, identified by position
    ByPosition,
}

impl DuplicatePolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "accumulate" | "sum" => Some(DuplicatePolicy::Accumulate),
            "first_occurrence" | "first" => Some(DuplicatePolicy::FirstOccurrence),
            "by_position" | "position" | "distinct" => Some(DuplicatePolicy::ByPosition),
            _ => None,
        }
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = SummarizeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        DuplicatePolicy::parse(value).ok_or_else(|| {
            SummarizeError::invalid_argument(format!("unknown duplicate policy: {value}"))
        })
    }
}

// ============================================================================
// Stopwords
// ============================================================================

/// Where the stopword list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// The classic fixed English list
    #[default]
    English,
    /// A language list from the `stop-words` crate (e.g. "de", "fr")
    Language(String),
    /// A caller-provided list
    Custom(Vec<String>),
    /// No stopword filtering
    None,
}

// ============================================================================
// Highlighting
// ============================================================================

/// Markers placed around selected sentences in the highlighted rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Inserted before a selected sentence
    pub open: String,
    /// Inserted after a selected sentence
    pub close: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::streamlit()
    }
}

impl HighlightStyle {
    /// Create a style from an arbitrary marker pair
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Colored caption markup: `:blue[...]`
    pub fn streamlit() -> Self {
        Self::new(":blue[", "]")
    }

    /// Markdown bold: `**...**`
    pub fn markdown() -> Self {
        Self::new("**", "**")
    }

    /// HTML mark element: `<mark>...</mark>`
    pub fn html() -> Self {
        Self::new("<mark>", "</mark>")
    }

    /// Wrap a sentence in the markers
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.open.len() + text.len() + self.close.len());
        out.push_str(&self.open);
        out.push_str(text);
        out.push_str(&self.close);
        out
    }
}

impl std::str::FromStr for HighlightStyle {
    type Err = SummarizeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "streamlit" | "caption" => Ok(Self::streamlit()),
            "markdown" | "md" | "bold" => Ok(Self::markdown()),
            "html" | "mark" => Ok(Self::html()),
            _ => Err(SummarizeError::invalid_argument(format!(
                "unknown highlight style: {value}"
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

fn default_num_sentences() -> usize {
    3
}

fn default_separator() -> String {
    "\n\n".to_string()
}

/// Configuration for extractive summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Number of sentences to select
    #[serde(default = "default_num_sentences")]
    pub num_sentences: usize,
    /// Base stopword list
    #[serde(default)]
    pub stopwords: StopwordSource,
    /// Additional stopwords layered on top of the base list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    /// How repeated sentence text is scored
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Markers around selected sentences in the highlighted rendering
    #[serde(default)]
    pub highlight: HighlightStyle,
    /// Appended after every sentence in the highlighted rendering
    #[serde(default = "default_separator")]
    pub paragraph_separator: String,
    /// Placed between selected sentences in the plain summary
    #[serde(default = "default_separator")]
    pub summary_separator: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: default_num_sentences(),
            stopwords: StopwordSource::default(),
            extra_stopwords: Vec::new(),
            duplicate_policy: DuplicatePolicy::default(),
            highlight: HighlightStyle::default(),
            paragraph_separator: default_separator(),
            summary_separator: default_separator(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_sentences == 0 {
            return Err(SummarizeError::invalid_config("num_sentences must be > 0"));
        }

        if self.highlight.open.is_empty() && self.highlight.close.is_empty() {
            return Err(SummarizeError::invalid_config(
                "highlight markers must not both be empty",
            ));
        }

        if let StopwordSource::Language(language) = &self.stopwords {
            if language.trim().is_empty() {
                return Err(SummarizeError::invalid_config(
                    "stopword language must not be empty",
                ));
            }
        }

        Ok(())
    }

    /// Builder method: set number of sentences
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Builder method: set stopword source
    pub fn with_stopwords(mut self, source: StopwordSource) -> Self {
        self.stopwords = source;
        self
    }

    /// Builder method: add stopwords on top of the base list
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Builder method: set highlight style
    pub fn with_highlight(mut self, style: HighlightStyle) -> Self {
        self.highlight = style;
        self
    }

    /// Builder method: set paragraph separator for the highlighted rendering
    pub fn with_paragraph_separator(mut self, separator: impl Into<String>) -> Self {
        self.paragraph_separator = separator.into();
        self
    }

    /// Builder method: set separator between summary sentences
    pub fn with_summary_separator(mut self, separator: impl Into<String>) -> Self {
        self.summary_separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str, score: f64, index: usize) -> ScoredSentence {
        ScoredSentence::new(text, score, index)
    }

    #[test]
    fn test_stable_cmp_score_descending() {
        let a = scored("a", 2.0, 5);
        let b = scored("b", 1.0, 0);
        assert_eq!(a.stable_cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(b.stable_cmp(&a), std::cmp::Ordering::Greater);
    }

    #[test]
    fn test_stable_cmp_tie_earliest_position() {
        let a = scored("later", 1.5, 3);
        let b = scored("earlier", 1.5, 1);
        assert_eq!(b.stable_cmp(&a), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_stable_cmp_epsilon_tie() {
        let a = scored("x", 1.0 + 1e-12, 2);
        let b = scored("y", 1.0, 1);
        // Within epsilon, position decides.
        assert_eq!(b.stable_cmp(&a), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_stable_cmp_sort_integration() {
        let mut sentences = vec![
            scored("c", 0.5, 2),
            scored("a", 1.0, 1),
            scored("b", 1.0, 0),
        ];
        sentences.sort_by(|a, b| a.stable_cmp(b));
        let order: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_config_validation() {
        assert!(SummarizerConfig::default().validate().is_ok());

        let bad = SummarizerConfig::default().with_num_sentences(0);
        assert!(matches!(bad.validate(), Err(SummarizeError::InvalidConfig(_))));

        let bad = SummarizerConfig::default().with_highlight(HighlightStyle::new("", ""));
        assert!(bad.validate().is_err());

        let bad = SummarizerConfig::default().with_stopwords(StopwordSource::Language(" ".into()));
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: SummarizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SummarizerConfig::default());
        assert_eq!(config.num_sentences, 3);
        assert_eq!(config.highlight, HighlightStyle::streamlit());
    }

    #[test]
    fn test_config_serde_overrides() {
        let json = r#"{
            "num_sentences": 2,
            "stopwords": {"language": "de"},
            "duplicate_policy": "by_position",
            "highlight": {"open": "<b>", "close": "</b>"}
        }"#;
        let config: SummarizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.num_sentences, 2);
        assert_eq!(config.stopwords, StopwordSource::Language("de".to_string()));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::ByPosition);
        assert_eq!(config.highlight.wrap("hi"), "<b>hi</b>");
        assert_eq!(config.summary_separator, "\n\n");
    }

    #[test]
    fn test_highlight_style_from_str() {
        assert_eq!("markdown".parse::<HighlightStyle>().unwrap(), HighlightStyle::markdown());
        assert_eq!("HTML".parse::<HighlightStyle>().unwrap(), HighlightStyle::html());
        assert!("sparkles".parse::<HighlightStyle>().is_err());
        assert_eq!(HighlightStyle::default().wrap("x"), ":blue[x]");
    }

    #[test]
    fn test_duplicate_policy_from_str() {
        assert_eq!("first".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::FirstOccurrence);
        assert_eq!("by_position".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::ByPosition);
        assert!("nope".parse::<DuplicatePolicy>().is_err());
    }
}
