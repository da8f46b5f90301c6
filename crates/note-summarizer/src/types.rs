use serde::{Deserialize, Serialize};

use crate::scoring::ScoringMode;

/// How much of the document the caller wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreset {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthPreset {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "short" => LengthPreset::Short,
            "long" => LengthPreset::Long,
            _ => LengthPreset::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Number of sentences to keep out of `candidates`.
    ///
    /// `ceil(fraction * candidates)` clamped to a per-preset floor and ceiling.
    pub fn target_count(&self, candidates: usize) -> usize {
        let (fraction, floor, ceiling) = match self {
            Self::Short => (0.15, 1, 3),
            Self::Medium => (0.35, 2, 6),
            Self::Long => (0.55, 3, 10),
        };
        let raw = (candidates as f64 * fraction).ceil() as usize;
        raw.clamp(floor, ceiling)
    }
}

impl std::str::FromStr for LengthPreset {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LengthPreset::parse(value))
    }
}

impl std::fmt::Display for LengthPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate sentence taken from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Trimmed sentence text, terminator included
    pub text: String,
    /// Position among the candidate sentences
    pub index: usize,
    /// Lowercase word tokens
    pub words: Vec<String>,
    pub score: f64,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let words = crate::processing::tokenize_words(&text);
        Self {
            text,
            index,
            words,
            score: 0.0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// A sentence that made it into the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    pub text: String,
    pub index: usize,
    pub score: f64,
}

impl From<&Sentence> for SelectedSentence {
    fn from(sentence: &Sentence) -> Self {
        Self {
            text: sentence.text.clone(),
            index: sentence.index,
            score: sentence.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary_text: String,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub compression_percent: i64,
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    pub candidate_count: usize,
    pub target_count: usize,
    pub strategy: ScoringMode,
    /// True when no sentence boundary was found and the raw text was returned
    pub fallback: bool,
}
