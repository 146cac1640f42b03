//! Phonetic encoders
//!
//! Map a spelling to a coarse pronunciation code so that homophones
//! ("beat"/"beet", "thyme"/"time") collapse onto the same key.

use rphonetic::{DoubleMetaphone, Encoder, Soundex};
use serde::{Deserialize, Serialize};

use crate::normalize::fold_to_ascii_letters;

/// Phonetic encoding algorithm
///
/// An empty code means "not encodable"; matchers treat it as a non-match.
/// Diacritics are stripped before encoding; words with other non-ASCII
/// letters are not encodable.
pub trait PhoneticEncoder: Send + Sync {
    fn encode(&self, word: &str) -> String;
}

/// American Soundex
///
/// First letter kept, remaining consonants mapped to articulatory-class digits,
/// vowels and adjacent duplicates dropped, padded to four characters
/// ("beat" → B300, "human" → H550).
pub struct SoundexEncoder {
    inner: Soundex,
}

impl SoundexEncoder {
    pub fn new() -> Self {
        Self {
            inner: Soundex::default(),
        }
    }
}

impl Default for SoundexEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneticEncoder for SoundexEncoder {
    fn encode(&self, word: &str) -> String {
        // the Soundex table only covers A-Z
        match fold_to_ascii_letters(word) {
            Some(word) => self.inner.encode(&word),
            None => String::new(),
        }
    }
}

/// Double Metaphone, primary code only
pub struct DoubleMetaphoneEncoder {
    inner: DoubleMetaphone,
}

impl DoubleMetaphoneEncoder {
    pub fn new() -> Self {
        Self {
            inner: DoubleMetaphone::default(),
        }
    }
}

impl Default for DoubleMetaphoneEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneticEncoder for DoubleMetaphoneEncoder {
    fn encode(&self, word: &str) -> String {
        match fold_to_ascii_letters(word) {
            Some(word) => self.inner.double_metaphone(&word).primary().to_string(),
            None => String::new(),
        }
    }
}

impl<E: PhoneticEncoder + ?Sized> PhoneticEncoder for Box<E> {
    fn encode(&self, word: &str) -> String {
        (**self).encode(word)
    }
}

/// Phonetic algorithm selection for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PhoneticKind {
    /// American Soundex (default)
    #[default]
    Soundex,
    /// Double Metaphone primary code
    DoubleMetaphone,
}

impl PhoneticKind {
    /// Instantiate the selected encoder
    pub fn create(self) -> Box<dyn PhoneticEncoder> {
        match self {
            PhoneticKind::Soundex => Box::new(SoundexEncoder::new()),
            PhoneticKind::DoubleMetaphone => Box::new(DoubleMetaphoneEncoder::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soundex_codes() {
        let encoder = SoundexEncoder::new();
        assert_eq!(encoder.encode("beat"), "B300");
        assert_eq!(encoder.encode("human"), "H550");
        assert_eq!(encoder.encode("cumin"), "C550");
        assert_eq!(encoder.encode("thy"), "T000");
    }

    #[test]
    fn test_soundex_homophones() {
        let encoder = SoundexEncoder::new();
        assert_eq!(encoder.encode("beat"), encoder.encode("beet"));
        assert_eq!(encoder.encode("faint"), encoder.encode("feint"));
        assert_eq!(encoder.encode("thyme"), encoder.encode("time"));
    }

    #[test]
    fn test_soundex_distinguishes() {
        let encoder = SoundexEncoder::new();
        assert_ne!(encoder.encode("thy"), encoder.encode("thyme"));
        assert_ne!(encoder.encode("trine"), encoder.encode("thyme"));
    }

    #[test]
    fn test_non_alphabetic_is_unencodable() {
        let encoder = SoundexEncoder::new();
        assert_eq!(encoder.encode(""), "");
        assert_eq!(encoder.encode("123"), "");
        assert_eq!(encoder.encode("b3at"), "");
    }

    #[test]
    fn test_accented_words_fold_before_encoding() {
        let encoders: Vec<Box<dyn PhoneticEncoder>> = vec![
            Box::new(SoundexEncoder::new()),
            Box::new(DoubleMetaphoneEncoder::new()),
        ];

        for encoder in &encoders {
            assert_eq!(encoder.encode("café"), encoder.encode("cafe"));
            assert_eq!(encoder.encode("naïve"), encoder.encode("naive"));
            assert_eq!(encoder.encode("ñandú"), encoder.encode("nandu"));
            assert!(!encoder.encode("é").is_empty());
            assert_eq!(encoder.encode("日本"), "");
        }
    }

    #[test]
    fn test_double_metaphone_homophones() {
        let encoder = DoubleMetaphoneEncoder::new();
        assert!(!encoder.encode("beat").is_empty());
        assert_eq!(encoder.encode("beat"), encoder.encode("beet"));
        assert_eq!(encoder.encode(""), "");
    }

    #[test]
    fn test_kind_create() {
        let encoder = PhoneticKind::Soundex.create();
        assert_eq!(encoder.encode("time"), "T500");
    }
}
