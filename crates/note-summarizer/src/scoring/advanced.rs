//! Frequency + key-phrase + position scoring.

use super::{ScoringContext, ScoringMode, ScoringStrategy};
use crate::analysis::frequency::MIN_COUNTED_WORD_LEN;
use crate::analysis::WordFrequency;
use crate::config::ScoringConfig;
use crate::processing::tokenize_words;
use crate::types::Sentence;

#[derive(Debug, Clone, Default)]
pub struct AdvancedScorer {
    config: ScoringConfig,
}

impl AdvancedScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score over raw parts, for callers that don't hold a [`Sentence`].
    ///
    /// 1. sum of `ln(freq + 1)` for counted words
    /// 2. fixed bonus per key phrase found as a substring
    /// 3. edge boost when `position / total` falls outside the middle band
    /// 4. penalty for very short or very long sentences
    /// 5. divided by `sqrt(word count)`
    pub fn score_parts(
        &self,
        text: &str,
        words: &[String],
        word_freq: &WordFrequency,
        key_phrases: &[String],
        position: usize,
        total_sentences: usize,
    ) -> f64 {
        if words.is_empty() {
            return 0.0;
        }
        let cfg = &self.config;

        let mut score: f64 = words
            .iter()
            .filter(|w| w.len() > MIN_COUNTED_WORD_LEN)
            .filter_map(|w| word_freq.get(w))
            .map(|freq| (freq as f64 + 1.0).ln())
            .sum();

        let lower = text.to_lowercase();
        let matched_phrases = key_phrases
            .iter()
            .filter(|phrase| lower.contains(phrase.as_str()))
            .count();
        score += matched_phrases as f64 * cfg.key_phrase_bonus;

        let normalized_position = if total_sentences == 0 {
            0.0
        } else {
            position as f64 / total_sentences as f64
        };
        if normalized_position < cfg.leading_edge || normalized_position > cfg.trailing_edge {
            score *= cfg.edge_boost;
        }

        let word_count = words.len();
        if word_count < cfg.min_words || word_count > cfg.max_words {
            score *= cfg.length_penalty;
        }

        score / (word_count as f64).sqrt()
    }
}

impl ScoringStrategy for AdvancedScorer {
    fn mode(&self) -> ScoringMode {
        ScoringMode::Advanced
    }

    fn score(&self, sentence: &Sentence, ctx: &ScoringContext) -> f64 {
        self.score_parts(
            &sentence.text,
            &sentence.words,
            &ctx.word_freq,
            &ctx.key_phrases,
            sentence.index,
            ctx.total_sentences,
        )
    }
}

/// Score one sentence with the default weights.
pub fn score_sentence(
    sentence: &str,
    word_freq: &WordFrequency,
    key_phrases: &[String],
    position: usize,
    total_sentences: usize,
) -> f64 {
    AdvancedScorer::default().score_parts(
        sentence,
        &tokenize_words(sentence),
        word_freq,
        key_phrases,
        position,
        total_sentences,
    )
}
