//! Vocabulary matching for speech recognition hypotheses
//!
//! Decides whether a recognized word (or any of several alternate hypotheses)
//! is equivalent to an entry of a fixed vocabulary, under one of:
//! - exact, case-insensitive equality
//! - equal stems ("walk" ~ "walking")
//! - equal phonetic codes ("beat" ~ "beet")
//! - phonetic codes within an edit-distance threshold ("human" ~ "cumin")
//!
//! ```
//! use word_matcher::{StemmedWordMatcher, WordMatcher};
//!
//! let matcher = StemmedWordMatcher::new(["tree", "car", "walk"]);
//! assert!(matcher.is_in("walking"));
//! assert!(matcher.is_in_any(&["one", "two", "cars"]));
//! ```

pub mod config;
mod error;
pub mod matcher;
pub mod normalize;
pub mod phonetic;
pub mod stem;
pub mod vocabulary;

pub use config::{MatchStrategy, MatcherConfig};
pub use error::MatcherError;
pub use matcher::{
    ExactWordMatcher, SoundsLikeThresholdWordMatcher, SoundsLikeWordMatcher, StemmedWordMatcher,
    WordMatcher,
};
pub use phonetic::{PhoneticEncoder, PhoneticKind};
pub use stem::{Stemmer, StemmerKind};
