//! Original frequency-sum scoring, kept as a fallback mode.
//!
//! Differences from [`super::AdvancedScorer`]: raw counts instead of
//! `ln(count + 1)`, no key phrases, a 1.2 lead boost and a separate 1.1 tail
//! boost, division by the plain word count, smaller target counts and no
//! near-duplicate filtering.

use super::{ScoringContext, ScoringMode, ScoringStrategy};
use crate::analysis::frequency::MIN_COUNTED_WORD_LEN;
use crate::types::{LengthPreset, Sentence};

const LEAD_FRACTION: f64 = 0.3;
const LEAD_BOOST: f64 = 1.2;
const TAIL_FRACTION: f64 = 0.7;
const TAIL_BOOST: f64 = 1.1;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyScorer;

impl ScoringStrategy for LegacyScorer {
    fn mode(&self) -> ScoringMode {
        ScoringMode::Legacy
    }

    fn score(&self, sentence: &Sentence, ctx: &ScoringContext) -> f64 {
        let words = &sentence.words;
        if words.is_empty() {
            return 0.0;
        }

        let mut score: f64 = words
            .iter()
            .filter(|w| w.len() > MIN_COUNTED_WORD_LEN)
            .filter_map(|w| ctx.word_freq.get(w))
            .map(|freq| freq as f64)
            .sum();

        let total = ctx.total_sentences as f64;
        let index = sentence.index as f64;
        if index < total * LEAD_FRACTION {
            score *= LEAD_BOOST;
        }
        if index > total * TAIL_FRACTION {
            score *= TAIL_BOOST;
        }

        score / words.len() as f64
    }

    fn target_count(&self, preset: LengthPreset, candidates: usize) -> usize {
        let (fraction, ceiling) = match preset {
            LengthPreset::Short => (0.2, 2),
            LengthPreset::Medium => (0.4, 5),
            LengthPreset::Long => (0.6, 8),
        };
        ((candidates as f64 * fraction).ceil() as usize).min(ceiling)
    }

    fn filters_near_duplicates(&self) -> bool {
        false
    }
}
