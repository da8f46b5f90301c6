//! Diversity-aware greedy sentence selection.
//!
//! Candidates are walked in descending score order. A candidate is accepted
//! only if its Jaccard similarity to every sentence already accepted stays
//! below the threshold. The accepted set is returned in document order.

use std::cmp::Ordering;

use crate::analysis::word_set_similarity;
use crate::types::Sentence;

#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Maximum number of sentences to keep
    pub target_count: usize,
    /// `None` disables the near-duplicate filter
    pub similarity_threshold: Option<f64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            target_count: 3,
            similarity_threshold: Some(0.7),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    pub fn new(target_count: usize) -> Self {
        Self {
            config: SelectorConfig {
                target_count,
                ..SelectorConfig::default()
            },
        }
    }

    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.similarity_threshold = Some(threshold.clamp(0.0, 1.0));
        self
    }

    pub fn without_diversity_filter(mut self) -> Self {
        self.config.similarity_threshold = None;
        self
    }

    pub fn target_count(&self) -> usize {
        self.config.target_count
    }

    /// Pick up to `target_count` sentences, highest score first, skipping
    /// near-duplicates. Ties keep their original relative order.
    pub fn select(&self, sentences: &[Sentence]) -> Vec<Sentence> {
        let mut ranked: Vec<&Sentence> = sentences.iter().collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut accepted: Vec<&Sentence> = Vec::with_capacity(self.config.target_count);
        for candidate in ranked {
            if accepted.len() >= self.config.target_count {
                break;
            }
            let is_diverse = match self.config.similarity_threshold {
                Some(threshold) => accepted
                    .iter()
                    .all(|chosen| word_set_similarity(&candidate.words, &chosen.words) < threshold),
                None => true,
            };
            if is_diverse {
                accepted.push(candidate);
            }
        }

        accepted.sort_by_key(|s| s.index);
        accepted.into_iter().cloned().collect()
    }
}

/// Select with an explicit target and threshold.
pub fn select(sentences: &[Sentence], target_count: usize, threshold: Option<f64>) -> Vec<Sentence> {
    SentenceSelector::with_config(SelectorConfig {
        target_count,
        similarity_threshold: threshold,
    })
    .select(sentences)
}
