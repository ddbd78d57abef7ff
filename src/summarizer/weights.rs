//! Scaled token frequencies
//!
//! Counts every normalized token, drops stopwords, and scales the remaining
//! counts by the largest one so the most frequent token weighs exactly 1.0.

use crate::errors::{Result, SummarizeError};
use crate::nlp::normalize::preprocess;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::WordTokenizer;
use rustc_hash::FxHashMap;

/// Mapping from retained token to its scaled frequency in (0, 1]
#[derive(Debug, Clone)]
pub struct TokenWeights {
    /// Raw occurrence counts of retained tokens
    counts: FxHashMap<String, usize>,
    /// Largest raw count among retained tokens
    max_count: usize,
}

impl TokenWeights {
    /// Compute weights for a document
    ///
    /// Fails with [`SummarizeError::NoContent`] when nothing survives
    /// stopword removal.
    pub fn compute(
        document: &str,
        tokenizer: &dyn WordTokenizer,
        stopwords: &StopwordFilter,
    ) -> Result<Self> {
        let normalized = preprocess(document);

        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokenizer.tokenize(&normalized) {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }

        counts.retain(|token, _| !stopwords.is_stopword(token));

        let max_count = counts
            .values()
            .copied()
            .max()
            .ok_or(SummarizeError::NoContent)?;

        Ok(Self { counts, max_count })
    }

    /// Scaled weight of a token, 0.0 when the token was not retained
    pub fn get(&self, token: &str) -> f64 {
        self.counts
            .get(token)
            .map_or(0.0, |&count| count as f64 / self.max_count as f64)
    }

    /// Raw count of a retained token
    pub fn raw_count(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    /// Largest raw count among retained tokens
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Check whether a token was retained
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct retained tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a successfully computed map
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(token, weight)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        let max = self.max_count as f64;
        self.counts
            .iter()
            .map(move |(token, &count)| (token.as_str(), count as f64 / max))
    }

    /// `(token, weight)` pairs sorted by weight descending, then token
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }

    /// Owned `token -> weight` map
    pub fn to_map(&self) -> FxHashMap<String, f64> {
        self.iter().map(|(t, w)| (t.to_string(), w)).collect()
    }
}
