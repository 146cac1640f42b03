//! Vocabulary matchers
//!
//! Every matcher is built once from a fixed vocabulary and then only answers
//! membership queries. Strategies differ only in how words are normalized
//! before comparison:
//! 1. exact: case-folded literal text
//! 2. stemmed: linguistic root
//! 3. sounds-like: phonetic code, equal
//! 4. sounds-like threshold: phonetic code, within an edit distance

mod exact;
mod sounds_like;
mod stemmed;
mod threshold;

pub use exact::ExactWordMatcher;
pub use sounds_like::SoundsLikeWordMatcher;
pub use stemmed::StemmedWordMatcher;
pub use threshold::SoundsLikeThresholdWordMatcher;

/// Membership test against a fixed vocabulary
///
/// Implementations are immutable after construction, so a single matcher can be
/// shared across threads behind an `Arc`.
pub trait WordMatcher: Send + Sync {
    /// True if `candidate` matches any vocabulary entry
    fn is_in(&self, candidate: &str) -> bool;

    /// True if any of the alternate hypotheses matches
    ///
    /// An empty slice never matches.
    fn is_in_any(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|candidate| self.is_in(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn all_matchers() -> Vec<Box<dyn WordMatcher>> {
        let vocabulary = ["tree", "car", "walk"];
        vec![
            Box::new(ExactWordMatcher::new(vocabulary)),
            Box::new(StemmedWordMatcher::new(vocabulary)),
            Box::new(SoundsLikeWordMatcher::new(vocabulary)),
            Box::new(SoundsLikeThresholdWordMatcher::new(1, vocabulary)),
        ]
    }

    #[test]
    fn test_empty_candidates_never_match() {
        for matcher in all_matchers() {
            assert!(!matcher.is_in_any(&[]));
        }
    }

    #[test]
    fn test_vocabulary_word_matches_itself() {
        for matcher in all_matchers() {
            assert!(matcher.is_in("tree"));
            assert!(matcher.is_in_any(&["nope", "walk"]));
        }
    }

    #[test]
    fn test_queries_are_idempotent() {
        for matcher in all_matchers() {
            let first = matcher.is_in("trees");
            for _ in 0..5 {
                assert_eq!(matcher.is_in("trees"), first);
            }
        }
    }

    #[test]
    fn test_concurrent_queries() {
        let matcher: Arc<dyn WordMatcher> = Arc::new(StemmedWordMatcher::new(["tree", "car", "walk"]));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let matcher = Arc::clone(&matcher);
                thread::spawn(move || {
                    for _ in 0..100 {
                        assert!(matcher.is_in("walking"));
                        assert!(!matcher.is_in("nothing"));
                        assert!(matcher.is_in_any(&["one", "cars"]), "thread {}", i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
