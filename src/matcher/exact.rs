//! Exact matching
//!
//! Whole-word, case-insensitive equality. No substring or prefix matching.

use crate::matcher::WordMatcher;
use crate::normalize::normalize_word;

/// Exact word matcher
///
/// Both sides go through [`normalize_word`], so surrounding whitespace is
/// ignored along with case (" Tree " matches "tree").
#[derive(Debug, Clone)]
pub struct ExactWordMatcher {
    /// Normalized vocabulary, in construction order
    vocabulary: Vec<String>,
}

impl ExactWordMatcher {
    /// Create an exact matcher
    ///
    /// # Arguments
    /// * `vocabulary` - target words; an empty vocabulary never matches
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary: Vec<String> = vocabulary
            .into_iter()
            .map(|word| normalize_word(word.as_ref()))
            .collect();

        tracing::debug!("exact matcher built with {} entries", vocabulary.len());

        Self { vocabulary }
    }

    /// Single-word vocabulary
    pub fn from_word(word: &str) -> Self {
        Self::new([word])
    }

    /// Normalized vocabulary entries
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

impl WordMatcher for ExactWordMatcher {
    fn is_in(&self, candidate: &str) -> bool {
        let candidate = normalize_word(candidate);
        self.vocabulary.iter().any(|word| *word == candidate)
    }
}
