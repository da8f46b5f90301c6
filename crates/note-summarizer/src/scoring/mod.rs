//! Sentence scoring strategies
//!
//! Two interchangeable algorithms sit behind [`ScoringStrategy`]:
//! - Advanced: log-damped word frequency, key-phrase bonus, edge boost,
//!   length penalty, square-root length normalization. The default.
//! - Legacy: raw frequency sums with separate lead/tail boosts and plain
//!   length normalization. Kept as a documented fallback.

pub mod advanced;
pub mod legacy;

use serde::{Deserialize, Serialize};

use crate::analysis::{key_phrases, WordFrequency};
use crate::config::ScoringConfig;
use crate::processing::Segmentation;
use crate::types::{LengthPreset, Sentence};

pub use advanced::{score_sentence, AdvancedScorer};
pub use legacy::LegacyScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    #[default]
    Advanced,
    Legacy,
}

impl ScoringMode {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "legacy" | "simple" | "basic" => ScoringMode::Legacy,
            _ => ScoringMode::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advanced => "advanced",
            Self::Legacy => "legacy",
        }
    }
}

impl std::str::FromStr for ScoringMode {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ScoringMode::parse(value))
    }
}

/// Document-wide tables shared by every sentence score in one call.
#[derive(Debug, Clone, Default)]
pub struct ScoringContext {
    pub word_freq: WordFrequency,
    pub key_phrases: Vec<String>,
    pub total_sentences: usize,
}

impl ScoringContext {
    pub fn build(text: &str, segmentation: &Segmentation, max_key_phrases: usize) -> Self {
        Self {
            word_freq: WordFrequency::from_words(&segmentation.words),
            key_phrases: key_phrases(text, max_key_phrases),
            total_sentences: segmentation.sentences.len(),
        }
    }
}

/// One way of turning candidate sentences into ranked scores.
pub trait ScoringStrategy: Send + Sync {
    fn mode(&self) -> ScoringMode;

    /// Score a single sentence. `sentence.index` is its position.
    fn score(&self, sentence: &Sentence, ctx: &ScoringContext) -> f64;

    /// How many sentences the selector should aim for.
    fn target_count(&self, preset: LengthPreset, candidates: usize) -> usize {
        preset.target_count(candidates)
    }

    /// Whether near-duplicate sentences are filtered during selection.
    fn filters_near_duplicates(&self) -> bool {
        true
    }

    /// Score every sentence in place.
    fn score_all(&self, sentences: &mut [Sentence], ctx: &ScoringContext) {
        for sentence in sentences.iter_mut() {
            sentence.score = self.score(sentence, ctx);
        }
    }
}

/// Build the strategy named by the config.
pub fn strategy_for(config: &ScoringConfig) -> Box<dyn ScoringStrategy> {
    match config.mode {
        ScoringMode::Advanced => Box::new(AdvancedScorer::new(config.clone())),
        ScoringMode::Legacy => Box::new(LegacyScorer),
    }
}
