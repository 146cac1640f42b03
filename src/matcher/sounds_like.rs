//! Sounds-like matching
//!
//! Two words match when their phonetic codes are equal ("beat" ~ "beet").

use crate::matcher::{ExactWordMatcher, WordMatcher};
use crate::normalize::normalize_word;
use crate::phonetic::{PhoneticEncoder, SoundexEncoder};

/// Sounds-like word matcher
pub struct SoundsLikeWordMatcher<E: PhoneticEncoder = SoundexEncoder> {
    encoder: E,
    /// Exact matcher over the vocabulary's phonetic codes
    codes: ExactWordMatcher,
}

impl SoundsLikeWordMatcher<SoundexEncoder> {
    /// Create a matcher using American Soundex
    pub fn new<I, T>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::with_encoder(SoundexEncoder::new(), vocabulary)
    }

    /// Single-word vocabulary
    pub fn from_word(word: &str) -> Self {
        Self::new([word])
    }
}

impl<E: PhoneticEncoder> SoundsLikeWordMatcher<E> {
    /// Create a matcher with a custom phonetic encoder
    pub fn with_encoder<I, T>(encoder: E, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let codes = encode_vocabulary(&encoder, vocabulary);
        tracing::debug!("sounds-like matcher built with {} codes", codes.len());

        Self {
            codes: ExactWordMatcher::new(codes),
            encoder,
        }
    }

    /// Phonetic codes of the vocabulary (case-folded)
    pub fn codes(&self) -> &[String] {
        self.codes.vocabulary()
    }
}

impl<E: PhoneticEncoder> WordMatcher for SoundsLikeWordMatcher<E> {
    fn is_in(&self, candidate: &str) -> bool {
        let code = self.encoder.encode(&normalize_word(candidate));
        tracing::trace!("encoded {:?} -> {:?}", candidate, code);
        if code.is_empty() {
            return false;
        }
        self.codes.is_in(&code)
    }
}

/// Encode every vocabulary word, dropping the ones without a code
pub(crate) fn encode_vocabulary<E, I, T>(encoder: &E, vocabulary: I) -> Vec<String>
where
    E: PhoneticEncoder + ?Sized,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    vocabulary
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref();
            let code = encoder.encode(&normalize_word(word));
            if code.is_empty() {
                tracing::debug!("skipping vocabulary entry {:?}: no phonetic code", word);
                None
            } else {
                Some(code)
            }
        })
        .collect()
}
