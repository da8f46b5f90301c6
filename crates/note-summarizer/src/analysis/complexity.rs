//! Readability metrics attached to exported reports.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::processing::{split_sentences, tokenize_words};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    fn from_average(avg_words_per_sentence: f64) -> Self {
        if avg_words_per_sentence > 20.0 {
            ComplexityLevel::High
        } else if avg_words_per_sentence > 15.0 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComplexity {
    pub sentences: usize,
    pub words: usize,
    /// Rounded to one decimal place
    pub avg_words_per_sentence: f64,
    /// Unique words over total words, rounded to two decimal places
    pub lexical_diversity: f64,
    pub complexity: ComplexityLevel,
}

impl TextComplexity {
    pub fn analyze(text: &str) -> Self {
        let sentences = split_sentences(text).len();
        let words = tokenize_words(text);
        let unique: HashSet<&str> = words.iter().map(String::as_str).collect();

        let avg = ratio(words.len(), sentences);
        let diversity = ratio(unique.len(), words.len());

        Self {
            sentences,
            words: words.len(),
            avg_words_per_sentence: round_to(avg, 1),
            lexical_diversity: round_to(diversity, 2),
            complexity: ComplexityLevel::from_average(avg),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
