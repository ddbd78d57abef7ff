//! Frequency-weighted extractive summarizer
//!
//! [`ExtractiveSummarizer`] owns the read-only resources (stopword list,
//! segmenter, tokenizer) and runs the stages in order:
//!
//! 1. token weights from the normalized document
//! 2. sentence scores over the raw sentences
//! 3. top-N selection
//! 4. highlighted rendering and plain summary
//!
//! Build it once and share it; every call is independent.

use super::render::{highlight, summary_text};
use super::scoring::SentenceScores;
use super::selector::SentenceSelector;
use super::weights::TokenWeights;
use crate::errors::Result;
use crate::nlp::normalize;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{RuleSegmenter, RuleTokenizer, SentenceSegmenter, WordTokenizer};
use crate::types::{ScoredSentence, Sentence, SummarizerConfig};
use rayon::prelude::*;
use serde::Serialize;

/// Output of one summarization run
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Full document, selected sentences wrapped in highlight markers
    pub markup: String,
    /// Selected sentences joined in selection order
    pub text: String,
    /// Selected sentences, best first
    pub selected: Vec<ScoredSentence>,
    /// Number of sentences found in the document
    pub sentence_count: usize,
}

impl Summary {
    /// Split into `(highlighted_markup, summary_text)`
    pub fn into_parts(self) -> (String, String) {
        (self.markup, self.text)
    }
}

/// Extractive summarizer with injected segmentation, tokenization and stopwords
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
    stopwords: StopwordFilter,
    segmenter: Box<dyn SentenceSegmenter>,
    tokenizer: Box<dyn WordTokenizer>,
}

impl std::fmt::Debug for ExtractiveSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractiveSummarizer")
            .field("config", &self.config)
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            stopwords: StopwordFilter::english(),
            segmenter: Box::new(RuleSegmenter::new()),
            tokenizer: Box::new(RuleTokenizer),
        }
    }

    /// Create with a custom configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::from_source(&config.stopwords, &config.extra_stopwords)?;

        Ok(Self {
            config,
            stopwords,
            segmenter: Box::new(RuleSegmenter::new()),
            tokenizer: Box::new(RuleTokenizer),
        })
    }

    /// Replace the sentence segmenter
    pub fn with_segmenter(mut self, segmenter: impl SentenceSegmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    /// Replace the word tokenizer
    pub fn with_tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Active stopword filter
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Normalize a document (see [`normalize::preprocess`])
    pub fn preprocess(&self, document: &str) -> String {
        normalize::preprocess(document)
    }

    /// Segment a document into sentences
    pub fn segment(&self, document: &str) -> Vec<Sentence> {
        self.segmenter.segment(document)
    }

    /// Scaled token frequencies of a document
    pub fn token_weights(&self, document: &str) -> Result<TokenWeights> {
        trace_stage!("token_weights");
        let weights = TokenWeights::compute(document, self.tokenizer.as_ref(), &self.stopwords)?;
        trace_debug!(
            tokens = weights.len(),
            max_count = weights.max_count(),
            "computed token weights"
        );
        Ok(weights)
    }

    /// Score every sentence of a document
    pub fn score_sentences(&self, document: &str) -> Result<SentenceScores> {
        self.score_segmented(document).map(|(_, scores)| scores)
    }

    fn score_segmented(&self, document: &str) -> Result<(Vec<Sentence>, SentenceScores)> {
        let weights = self.token_weights(document)?;

        trace_stage!("score_sentences");
        let sentences = self.segment(document);
        let scores = SentenceScores::compute(
            &sentences,
            &weights,
            self.tokenizer.as_ref(),
            self.config.duplicate_policy,
        );
        trace_debug!(
            sentences = sentences.len(),
            entries = scores.len(),
            "scored sentences"
        );

        Ok((sentences, scores))
    }

    /// Summarize into `(highlighted_markup, summary_text)` with `n` sentences
    ///
    /// `n == 0` is rejected before any work is done.
    pub fn summarize(&self, document: &str, n: usize) -> Result<(String, String)> {
        self.run_with(document, n).map(Summary::into_parts)
    }

    /// Summarize with the configured number of sentences
    pub fn run(&self, document: &str) -> Result<Summary> {
        self.run_with(document, self.config.num_sentences)
    }

    /// Summarize with an explicit number of sentences
    pub fn run_with(&self, document: &str, n: usize) -> Result<Summary> {
        let selector = SentenceSelector::new(n)?;
        let (sentences, scores) = self.score_segmented(document)?;

        trace_stage!("select");
        let selection = selector.select(&scores);
        trace_debug!(requested = n, selected = selection.len(), "selected sentences");

        trace_stage!("render");
        let markup = highlight(
            &sentences,
            &selection,
            scores.policy(),
            &self.config.highlight,
            &self.config.paragraph_separator,
        );
        let text = summary_text(&selection, &self.config.summary_separator);

        Ok(Summary {
            markup,
            text,
            selected: selection.sentences,
            sentence_count: sentences.len(),
        })
    }

    /// Summarize many documents in parallel with the configured sentence count
    pub fn run_batch<S>(&self, documents: &[S]) -> Vec<Result<Summary>>
    where
        S: AsRef<str> + Sync,
    {
        trace_debug!(documents = documents.len(), "batch summarization");
        documents
            .par_iter()
            .map(|document| self.run(document.as_ref()))
            .collect()
    }
}
