//! Top-N sentence selection
//!
//! Picks the highest-scoring sentences. Ties are broken by earliest document
//! position, so repeated runs over the same input always agree.

use super::scoring::SentenceScores;
use crate::errors::{Result, SummarizeError};
use crate::types::ScoredSentence;
use serde::Serialize;

/// Result of sentence selection
#[derive(Debug, Clone, Default, Serialize)]
pub struct Selection {
    /// Selected sentences, best first
    pub sentences: Vec<ScoredSentence>,
}

impl Selection {
    /// Check whether a sentence text was selected
    pub fn contains_text(&self, text: &str) -> bool {
        self.sentences.iter().any(|s| s.text == text)
    }

    /// Check whether the sentence at a document position was selected
    pub fn contains_index(&self, index: usize) -> bool {
        self.sentences.iter().any(|s| s.index == index)
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Score-ordered sentence selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self { num_sentences: 3 }
    }
}

impl SentenceSelector {
    /// Create a selector returning at most `n` sentences
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SummarizeError::invalid_argument(
                "number of sentences must be >= 1, got 0",
            ));
        }
        Ok(Self { num_sentences: n })
    }

    /// Number of sentences this selector returns at most
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Select the top sentences, best first
    pub fn select(&self, scores: &SentenceScores) -> Selection {
        let mut ranked: Vec<ScoredSentence> = scores.entries().to_vec();
        ranked.sort_by(|a, b| a.stable_cmp(b));
        ranked.truncate(self.num_sentences);

        Selection { sentences: ranked }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::{RuleSegmenter, RuleTokenizer, SentenceSegmenter};
    use crate::summarizer::weights::TokenWeights;
    use crate::types::DuplicatePolicy;

    fn scores(document: &str) -> SentenceScores {
        let weights =
            TokenWeights::compute(document, &RuleTokenizer, &StopwordFilter::english()).unwrap();
        let sentences = RuleSegmenter::new().segment(document);
        SentenceScores::compute(&sentences, &weights, &RuleTokenizer, DuplicatePolicy::Accumulate)
    }

    #[test]
    fn test_selects_highest_score() {
        let s = scores("A cat sat. A cat ran fast. Dogs bark loudly.");
        let selection = SentenceSelector::new(1).unwrap().select(&s);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.sentences[0].text, "A cat ran fast.");
    }

    #[test]
    fn test_tie_breaks_on_earliest_position() {
        // "A cat sat." and "Dogs bark loudly." both score 1.5.
        let s = scores("A cat sat. A cat ran fast. Dogs bark loudly.");
        let selection = SentenceSelector::new(2).unwrap().select(&s);

        let texts: Vec<_> = selection.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["A cat ran fast.", "A cat sat."]);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let doc = "Red fox. Blue owl. Green elk. Gray yak.";
        let selector = SentenceSelector::new(2).unwrap();
        let first = selector.select(&scores(doc));
        for _ in 0..10 {
            let again = selector.select(&scores(doc));
            assert_eq!(again.sentences, first.sentences);
        }
        assert_eq!(first.sentences[0].text, "Red fox.");
        assert_eq!(first.sentences[1].text, "Blue owl.");
    }

    #[test]
    fn test_n_larger_than_sentence_count() {
        let s = scores("One owl. Two owls hoot.");
        let selection = SentenceSelector::new(10).unwrap().select(&s);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_selection_lookup() {
        let s = scores("A cat sat. A cat ran fast. Dogs bark loudly.");
        let selection = SentenceSelector::new(2).unwrap().select(&s);
        assert!(selection.contains_text("A cat sat."));
        assert!(selection.contains_index(1));
        assert!(!selection.contains_index(2));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(
            SentenceSelector::new(0),
            Err(SummarizeError::InvalidArgument(_))
        ));
    }
}
