// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::MatcherError;
use crate::matcher::{
    ExactWordMatcher, SoundsLikeThresholdWordMatcher, SoundsLikeWordMatcher, StemmedWordMatcher,
    WordMatcher,
};
use crate::phonetic::PhoneticKind;
use crate::stem::StemmerKind;
use crate::vocabulary::load_vocabulary;

// ============================================================================
// Matching strategy
// ============================================================================

/// Matching strategy
///
/// Ordered from strictest to most permissive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Case-insensitive literal equality (default)
    #[default]
    Exact,
    /// Equal stems ("walk" ~ "walking")
    Stemmed,
    /// Equal phonetic codes ("beat" ~ "beet")
    SoundsLike,
    /// Phonetic codes within `threshold` edits
    SoundsLikeThreshold,
}

// ============================================================================
// Matcher configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    #[serde(default)]
    pub strategy: MatchStrategy,
    /// Inline vocabulary entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,
    /// Vocabulary file, one entry per line (appended after inline entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_file: Option<PathBuf>,
    /// Edit-distance tolerance, required by `sounds_like_threshold`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(default)]
    pub phonetic: PhoneticKind,
    #[serde(default)]
    pub stemmer: StemmerKind,
}

impl MatcherConfig {
    pub fn new(strategy: MatchStrategy, vocabulary: Vec<String>) -> Self {
        Self {
            strategy,
            vocabulary: Some(vocabulary),
            ..Self::default()
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("unable to locate config directory"))?;
        let app_dir = config_dir.join("WordMatcher");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// Load from the default config path, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        tracing::info!("loading matcher config from {:?}", path);

        if !path.exists() {
            tracing::warn!(
                "config file not found, using defaults (no vocabulary: set `vocabulary` or `vocabulary_file` before building)"
            );
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load a config that must exist, falling back to the default path
    ///
    /// Unlike [`load`](Self::load), a missing file is an error.
    pub fn load_existing(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };
        if !path.exists() {
            anyhow::bail!(
                "no config file at {} (create one with a `vocabulary` or `vocabulary_file`)",
                path.display()
            );
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MatcherConfig = serde_json::from_str(&content)?;
        tracing::debug!("loaded config: strategy={:?}", config.strategy);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("saved matcher config to {:?}", path);
        Ok(())
    }

    /// Inline entries followed by file entries
    ///
    /// Fails when neither source is configured.
    pub fn resolve_vocabulary(&self) -> Result<Vec<String>, MatcherError> {
        if self.vocabulary.is_none() && self.vocabulary_file.is_none() {
            return Err(MatcherError::MissingVocabulary);
        }

        let mut words = self.vocabulary.clone().unwrap_or_default();
        if let Some(path) = &self.vocabulary_file {
            words.extend(load_vocabulary(path)?);
        }
        Ok(words)
    }

    /// Build the configured matcher
    pub fn build(&self) -> Result<Box<dyn WordMatcher>, MatcherError> {
        let vocabulary = self.resolve_vocabulary()?;
        tracing::info!(
            "building {:?} matcher over {} words",
            self.strategy,
            vocabulary.len()
        );

        let matcher: Box<dyn WordMatcher> = match self.strategy {
            MatchStrategy::Exact => Box::new(ExactWordMatcher::new(vocabulary)),
            MatchStrategy::Stemmed => Box::new(StemmedWordMatcher::with_stemmer(
                self.stemmer.create(),
                vocabulary,
            )),
            MatchStrategy::SoundsLike => Box::new(SoundsLikeWordMatcher::with_encoder(
                self.phonetic.create(),
                vocabulary,
            )),
            MatchStrategy::SoundsLikeThreshold => {
                let threshold = self.threshold.ok_or(MatcherError::MissingThreshold)?;
                Box::new(SoundsLikeThresholdWordMatcher::with_encoder(
                    self.phonetic.create(),
                    threshold,
                    vocabulary,
                ))
            }
        };

        Ok(matcher)
    }
}
