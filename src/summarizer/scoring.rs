//! Sentence scoring
//!
//! A sentence scores the sum of the token weights of its words. Words are
//! looked up lowercased but otherwise as the tokenizer saw them in the raw
//! sentence, so a word whose normalized form differs (e.g. `don't` vs
//! `dont`) contributes nothing.

use super::weights::TokenWeights;
use crate::nlp::tokenizer::WordTokenizer;
use crate::types::{DuplicatePolicy, ScoredSentence, Sentence};
use rustc_hash::FxHashMap;

/// Scores for every sentence of a document, in first-occurrence order
#[derive(Debug, Clone)]
pub struct SentenceScores {
    entries: Vec<ScoredSentence>,
    /// Sentence text -> index of its first entry
    by_text: FxHashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl SentenceScores {
    /// Score `sentences` against precomputed token weights
    pub fn compute(
        sentences: &[Sentence],
        weights: &TokenWeights,
        tokenizer: &dyn WordTokenizer,
        policy: DuplicatePolicy,
    ) -> Self {
        let mut entries: Vec<ScoredSentence> = Vec::with_capacity(sentences.len());
        let mut by_text: FxHashMap<String, usize> = FxHashMap::default();

        for sentence in sentences {
            let score = Self::score_text(&sentence.text, weights, tokenizer);

            let existing = by_text.get(&sentence.text).copied();

            match (policy, existing) {
                (DuplicatePolicy::Accumulate, Some(slot)) => {
                    entries[slot].score += score;
                    entries[slot].occurrences += 1;
                }
                (DuplicatePolicy::FirstOccurrence, Some(slot)) => {
                    entries[slot].occurrences += 1;
                }
                (_, first) => {
                    if first.is_none() {
                        by_text.insert(sentence.text.clone(), entries.len());
                    }
                    entries.push(ScoredSentence::new(
                        sentence.text.clone(),
                        score,
                        sentence.index,
                    ));
                }
            }
        }

        Self {
            entries,
            by_text,
            policy,
        }
    }

    /// Sum of token weights over the words of `text`
    pub fn score_text(text: &str, weights: &TokenWeights, tokenizer: &dyn WordTokenizer) -> f64 {
        tokenizer
            .tokenize(text)
            .into_iter()
            .map(|word| {
                if word.chars().any(char::is_uppercase) {
                    weights.get(&word.to_lowercase())
                } else {
                    weights.get(word)
                }
            })
            .sum()
    }

    /// Score of the first entry with this exact text
    pub fn get(&self, text: &str) -> Option<f64> {
        self.by_text.get(text).map(|&slot| self.entries[slot].score)
    }

    /// All entries in first-occurrence order
    pub fn entries(&self) -> &[ScoredSentence] {
        &self.entries
    }

    /// Iterate over `(text, score)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|e| (e.text.as_str(), e.score))
    }

    /// Policy used to build these scores
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Number of scored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
