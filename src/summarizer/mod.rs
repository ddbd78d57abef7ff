//! Summarization components
//!
//! Provides frequency-weighted extractive summarization: scaled token
//! weights, per-sentence scores, top-N selection and rendering.

pub mod extractive;
pub mod render;
pub mod scoring;
pub mod selector;
pub mod weights;
