//! Stemming service
//!
//! Reduces a word to its root so that inflected forms compare equal.
//! Best-effort: anything that is not a plain alphabetic word passes through unchanged.

use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};
use serde::{Deserialize, Serialize};

use crate::normalize::is_alphabetic_word;

/// Stemming algorithm
pub trait Stemmer: Send + Sync {
    /// Reduce `word` to its root. Must be deterministic.
    fn stem(&self, word: &str) -> String;
}

/// Snowball (Porter2) English stemmer
///
/// "walking", "walks", "walked" → "walk"; "trees" → "tree"
pub struct EnglishStemmer {
    inner: SnowballStemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        if !is_alphabetic_word(word) {
            return word.to_string();
        }
        // Snowball expects lower-case input
        let lower = word.to_lowercase();
        self.inner.stem(&lower).into_owned()
    }
}

/// Identity stemmer (stemmed matching degrades to exact matching)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStemmer;

impl Stemmer for NoopStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Stemmer selection for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    /// Snowball English (default)
    #[default]
    English,
    /// No stemming
    None,
}

impl StemmerKind {
    /// Instantiate the selected stemmer
    pub fn create(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::English => Box::new(EnglishStemmer::new()),
            StemmerKind::None => Box::new(NoopStemmer),
        }
    }
}

impl<S: Stemmer + ?Sized> Stemmer for Box<S> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}
