//! Vocabulary file parsing
//!
//! One entry per line. Blank lines and `#` comments are ignored.

use std::collections::HashSet;
use std::path::Path;

use crate::error::MatcherError;

/// Parse vocabulary text
///
/// Entries are trimmed; duplicates are dropped keeping first occurrence.
pub fn parse_vocabulary(text: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut entries = Vec::new();

    for line in text.lines() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        if seen.insert(entry) {
            entries.push(entry.to_string());
        }
    }

    entries
}

/// Read and parse a vocabulary file
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>, MatcherError> {
    let content = std::fs::read_to_string(path).map_err(|source| MatcherError::Vocabulary {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_vocabulary(&content);
    tracing::debug!("loaded {} vocabulary entries from {:?}", entries.len(), path);
    Ok(entries)
}
