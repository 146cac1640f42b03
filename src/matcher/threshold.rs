//! Sounds-like matching with tolerance
//!
//! Like [`SoundsLikeWordMatcher`](super::SoundsLikeWordMatcher), but a
//! candidate matches when the edit distance between phonetic codes is at most
//! `threshold`. Threshold 0 is plain code equality.

use strsim::levenshtein;

use crate::matcher::sounds_like::encode_vocabulary;
use crate::matcher::WordMatcher;
use crate::normalize::normalize_word;
use crate::phonetic::{PhoneticEncoder, SoundexEncoder};

/// Sounds-like matcher with edit-distance tolerance
pub struct SoundsLikeThresholdWordMatcher<E: PhoneticEncoder = SoundexEncoder> {
    encoder: E,
    /// Maximum edit distance between codes
    threshold: u32,
    /// Vocabulary phonetic codes
    codes: Vec<String>,
}

impl SoundsLikeThresholdWordMatcher<SoundexEncoder> {
    /// Create a matcher using American Soundex
    ///
    /// # Arguments
    /// * `threshold` - maximum edit distance between phonetic codes
    /// * `vocabulary` - target words
    pub fn new<I, T>(threshold: u32, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::with_encoder(SoundexEncoder::new(), threshold, vocabulary)
    }

    /// Single-word vocabulary
    pub fn from_word(threshold: u32, word: &str) -> Self {
        Self::new(threshold, [word])
    }
}

impl<E: PhoneticEncoder> SoundsLikeThresholdWordMatcher<E> {
    /// Create a matcher with a custom phonetic encoder
    pub fn with_encoder<I, T>(encoder: E, threshold: u32, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let codes = encode_vocabulary(&encoder, vocabulary);
        tracing::debug!(
            "sounds-like threshold matcher built with {} codes (threshold={})",
            codes.len(),
            threshold
        );

        Self {
            encoder,
            threshold,
            codes,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Vocabulary phonetic codes
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

impl<E: PhoneticEncoder> WordMatcher for SoundsLikeThresholdWordMatcher<E> {
    fn is_in(&self, candidate: &str) -> bool {
        let code = self.encoder.encode(&normalize_word(candidate));
        if code.is_empty() {
            return false;
        }

        let threshold = self.threshold as usize;
        let matched = self
            .codes
            .iter()
            .any(|word_code| within_distance(&code, word_code, threshold));

        tracing::trace!("encoded {:?} -> {:?}, matched={}", candidate, code, matched);
        matched
    }
}

/// Levenshtein distance between `a` and `b` is at most `threshold`
fn within_distance(a: &str, b: &str, threshold: usize) -> bool {
    if a == b {
        return true;
    }
    // length difference is a lower bound on the distance
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > threshold {
        return false;
    }
    levenshtein(a, b) <= threshold
}
