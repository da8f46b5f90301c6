use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SummarizerError, SummarizerResult};
use crate::scoring::ScoringMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub segmentation: SegmentationConfig,
    pub scoring: ScoringConfig,
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Sentences whose trimmed length is at or below this many characters are dropped
    pub min_sentence_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub mode: ScoringMode,
    pub max_key_phrases: usize,
    pub key_phrase_bonus: f64,
    /// Normalized positions below this get the edge boost
    pub leading_edge: f64,
    /// Normalized positions above this get the edge boost
    pub trailing_edge: f64,
    pub edge_boost: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub length_penalty: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Candidates at or above this Jaccard similarity to an accepted sentence are skipped
    pub similarity_threshold: f64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: 10,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Advanced,
            max_key_phrases: 10,
            key_phrase_bonus: 2.0,
            leading_edge: 0.2,
            trailing_edge: 0.8,
            edge_boost: 1.3,
            min_words: 5,
            max_words: 40,
            length_penalty: 0.7,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
        }
    }
}

impl SummarizerConfig {
    /// Validate config values, returning errors for clearly broken configurations.
    pub fn validate(&self) -> SummarizerResult<()> {
        let scoring = &self.scoring;
        if !(0.0..=1.0).contains(&scoring.leading_edge)
            || !(0.0..=1.0).contains(&scoring.trailing_edge)
        {
            return Err(invalid("scoring edges must be in [0.0, 1.0]"));
        }
        if scoring.leading_edge > scoring.trailing_edge {
            return Err(invalid("scoring.leading_edge must be <= trailing_edge"));
        }
        if scoring.min_words > scoring.max_words {
            return Err(invalid("scoring.min_words must be <= max_words"));
        }
        if scoring.edge_boost <= 0.0 || scoring.length_penalty <= 0.0 {
            return Err(invalid("scoring multipliers must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.selection.similarity_threshold) {
            return Err(invalid("selection.similarity_threshold must be in [0.0, 1.0]"));
        }
        Ok(())
    }

    /// Load config from a JSON file, falling back to defaults for missing fields.
    pub fn from_file(path: &Path) -> SummarizerResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| SummarizerError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Self =
            serde_json::from_str(&content).map_err(SummarizerError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Where a user-level config file is looked up.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("note-summarizer")
            .join("config.json")
    }

    /// Load the user config if one exists, otherwise defaults.
    pub fn load_or_default() -> SummarizerResult<Self> {
        Self::load_or_default_from(&Self::default_path())
    }

    /// Load `path` if it exists, otherwise defaults.
    pub fn load_or_default_from(path: &Path) -> SummarizerResult<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn invalid(msg: &str) -> SummarizerError {
    SummarizerError::InvalidConfig(msg.to_string())
}
