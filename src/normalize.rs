//! Word normalization
//!
//! Shared front half of every matching strategy: NFC + whitespace trim + case folding.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a word for comparison
///
/// NFC first so that precomposed and decomposed accents compare equal,
/// then trim surrounding whitespace and lower-case.
pub fn normalize_word(word: &str) -> String {
    let nfc: String = word.nfc().collect();
    nfc.trim().to_lowercase()
}

/// True when the word is non-empty and every character is alphabetic
///
/// Stemmers and phonetic encoders only transform words that pass this check.
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Strip diacritics and return the word if only ASCII letters remain
///
/// "café" → "cafe", "ñandú" → "nandu"; "日本" and "b3at" → `None`.
pub fn fold_to_ascii_letters(word: &str) -> Option<String> {
    let folded: String = word.nfd().filter(|&c| !is_combining_mark(c)).collect();
    if !folded.is_empty() && folded.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(folded)
    } else {
        None
    }
}
