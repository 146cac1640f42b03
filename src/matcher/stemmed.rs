//! Stemmed matching
//!
//! Two words match when their stems match ("walk" ~ "walking").

use crate::matcher::{ExactWordMatcher, WordMatcher};
use crate::normalize::normalize_word;
use crate::stem::{EnglishStemmer, Stemmer};

/// Stemmed word matcher
///
/// The vocabulary is stemmed once at construction; each query stems the
/// candidate once and compares against the stored stems.
pub struct StemmedWordMatcher<S: Stemmer = EnglishStemmer> {
    stemmer: S,
    /// Exact matcher over the stemmed vocabulary
    stems: ExactWordMatcher,
}

impl StemmedWordMatcher<EnglishStemmer> {
    /// Create a matcher using the Snowball English stemmer
    pub fn new<I, T>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::with_stemmer(EnglishStemmer::new(), vocabulary)
    }

    /// Single-word vocabulary
    pub fn from_word(word: &str) -> Self {
        Self::new([word])
    }
}

impl<S: Stemmer> StemmedWordMatcher<S> {
    /// Create a matcher with a custom stemming algorithm
    pub fn with_stemmer<I, T>(stemmer: S, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let stems: Vec<String> = vocabulary
            .into_iter()
            .map(|word| stemmer.stem(&normalize_word(word.as_ref())))
            .collect();

        tracing::debug!("stemmed matcher built with {} stems", stems.len());

        Self {
            stems: ExactWordMatcher::new(stems),
            stemmer,
        }
    }

    /// Stemmed vocabulary entries
    pub fn stems(&self) -> &[String] {
        self.stems.vocabulary()
    }
}

impl<S: Stemmer> WordMatcher for StemmedWordMatcher<S> {
    fn is_in(&self, candidate: &str) -> bool {
        let stem = self.stemmer.stem(&normalize_word(candidate));
        tracing::trace!("stemmed {:?} -> {:?}", candidate, stem);
        self.stems.is_in(&stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::NoopStemmer;

    #[test]
    fn test_stemmed_match() {
        let matcher = StemmedWordMatcher::new(["tree", "car", "walk"]);

        assert!(matcher.is_in("tree"));
        assert!(matcher.is_in("trees"));
        assert!(matcher.is_in("cars"));
        assert!(matcher.is_in("walk"));
        assert!(matcher.is_in("walking"));
        assert!(matcher.is_in("walks"));
        assert!(matcher.is_in("walked"));
    }

    #[test]
    fn test_stemmed_no_match() {
        let matcher = StemmedWordMatcher::new(["tree", "car", "walk"]);

        assert!(!matcher.is_in("NOTHING"));
        assert!(!matcher.is_in(""));
    }

    #[test]
    fn test_stemmed_sequence() {
        let matcher = StemmedWordMatcher::new(["tree", "car", "walk"]);

        assert!(matcher.is_in_any(&["one", "two", "walks"]));
        assert!(!matcher.is_in_any(&["one", "two"]));
    }

    #[test]
    fn test_inflected_vocabulary() {
        // stems apply to the vocabulary as well
        let matcher = StemmedWordMatcher::from_word("Walking");

        assert!(matcher.is_in("walked"));
        assert_eq!(matcher.stems(), &["walk".to_string()]);
    }

    #[test]
    fn test_custom_stemmer() {
        let matcher = StemmedWordMatcher::with_stemmer(NoopStemmer, ["walk"]);

        assert!(matcher.is_in("walk"));
        assert!(!matcher.is_in("walking"));
    }

    #[test]
    fn test_non_alphabetic_candidate() {
        let matcher = StemmedWordMatcher::new(["walk"]);
        assert!(!matcher.is_in("walk1ng"));
    }
}
