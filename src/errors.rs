//! Error types for rapid_summarize

use thiserror::Error;

/// Errors that can occur while summarizing a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// No scoreable token survived normalization and stopword removal
    #[error("document has no scoreable content after stopword removal")]
    NoContent,

    /// A call argument was malformed (e.g. asking for zero sentences)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The summarizer configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SummarizeError {
    /// Create an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SummarizeError::InvalidArgument(message.into())
    }

    /// Create an `InvalidConfig` error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SummarizeError::InvalidConfig(message.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SummarizeError::NoContent.to_string(),
            "document has no scoreable content after stopword removal"
        );
        assert_eq!(
            SummarizeError::invalid_argument("n must be >= 1, got 0").to_string(),
            "invalid argument: n must be >= 1, got 0"
        );
        assert_eq!(
            SummarizeError::invalid_config("num_sentences must be > 0").to_string(),
            "invalid configuration: num_sentences must be > 0"
        );
    }

    #[test]
    fn test_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>(_: &T) {}
        assert_error(&SummarizeError::NoContent);
    }
}
