//! Natural Language Processing components
//!
//! This module provides normalization, segmentation, tokenization and
//! stopword filtering.

pub mod normalize;
pub mod stopwords;
pub mod tokenizer;
