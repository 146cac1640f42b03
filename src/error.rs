//! Matcher construction errors
//!
//! Queries never fail; only building a matcher from configuration can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatcherError {
    /// Neither an inline vocabulary nor a vocabulary file was supplied
    #[error("matcher requires a vocabulary (set `vocabulary` or `vocabulary_file`)")]
    MissingVocabulary,

    /// `sounds_like_threshold` was selected without a threshold
    #[error("strategy `sounds_like_threshold` requires a `threshold`")]
    MissingThreshold,

    /// Vocabulary file could not be read
    #[error("failed to read vocabulary file {path:?}")]
    Vocabulary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_vocabulary_error_message_omits_source() {
        let err = MatcherError::Vocabulary {
            path: PathBuf::from("words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert_eq!(err.to_string(), "failed to read vocabulary file \"words.txt\"");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("gone"));
    }
}
