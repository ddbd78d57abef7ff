//! # rapid_summarize
//!
//! Frequency-weighted extractive text summarization.
//!
//! Every non-stopword token is weighted by its frequency scaled to the most
//! frequent token, each sentence scores the sum of its word weights, and the
//! top-N sentences form the summary. Alongside the summary a full rendering
//! of the document is produced with the chosen sentences highlighted.
//!
//! ## Quick start
//!
//! ```rust
//! use rapid_summarize::summarize;
//!
//! let text = "A cat sat. A cat ran fast. Dogs bark loudly.";
//! let (markup, summary) = summarize(text, 1).unwrap();
//!
//! assert_eq!(summary, "A cat ran fast.");
//! assert!(markup.contains(":blue[A cat ran fast.]"));
//! ```
//!
//! For repeated use or custom settings build an [`ExtractiveSummarizer`]
//! once and share it.

/// Enter a tracing span for a summarization stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

/// Emit a `debug` event when the `tracing` feature is enabled.
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod errors;
pub mod nlp;
pub mod sample;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummarizeError};
pub use nlp::normalize::preprocess;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{RuleSegmenter, RuleTokenizer, SentenceSegmenter, WordTokenizer};
pub use summarizer::extractive::{ExtractiveSummarizer, Summary};
pub use summarizer::scoring::SentenceScores;
pub use summarizer::selector::{Selection, SentenceSelector};
pub use summarizer::weights::TokenWeights;
pub use types::{
    DuplicatePolicy, HighlightStyle, ScoredSentence, Sentence, StopwordSource, SummarizerConfig,
};

use once_cell::sync::Lazy;

static DEFAULT_SUMMARIZER: Lazy<ExtractiveSummarizer> = Lazy::new(ExtractiveSummarizer::new);

/// Scaled token frequencies using the default summarizer
pub fn token_weights(document: &str) -> Result<TokenWeights> {
    DEFAULT_SUMMARIZER.token_weights(document)
}

/// Sentence scores using the default summarizer
pub fn score_sentences(document: &str) -> Result<SentenceScores> {
    DEFAULT_SUMMARIZER.score_sentences(document)
}

/// Summarize a document into `(highlighted_markup, summary_text)`
///
/// Fails with [`SummarizeError::InvalidArgument`] when `n == 0` and with
/// [`SummarizeError::NoContent`] when nothing but stopwords remains.
pub fn summarize(document: &str, n: usize) -> Result<(String, String)> {
    DEFAULT_SUMMARIZER.summarize(document, n)
}
