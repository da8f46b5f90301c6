//! Sentence and word segmentation.
//!
//! Regex heuristics only: abbreviations ("Dr."), decimals ("3.14") and
//! embedded punctuation split sentences where a human would not. That is an
//! accepted limitation; no attempt is made at real NLP segmentation.

use std::sync::LazyLock;

use crate::config::SegmentationConfig;
use crate::types::Sentence;

/// A run of non-terminators followed by one or more terminators.
static SENTENCE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"[^.!?]+[.!?]+").expect("sentence regex is valid")
});
static WORD_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"[A-Za-z0-9_]+").expect("word regex is valid")
});

/// Output of [`segment`].
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    /// Candidate sentences, already trimmed and length-filtered
    pub sentences: Vec<Sentence>,
    /// Every lowercase word in the document, in order
    pub words: Vec<String>,
    /// Number of terminator-delimited sentences before filtering
    pub raw_sentence_count: usize,
}

impl Segmentation {
    /// True when the document had no terminal punctuation at all.
    pub fn has_no_sentences(&self) -> bool {
        self.raw_sentence_count == 0
    }
}

/// Split text into sentences. Terminators stay attached; any trailing text
/// without a terminator is dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercase word tokens: maximal runs of ASCII letters, digits and underscore.
pub fn tokenize_words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Segment a document into candidate sentences and words.
///
/// Sentence length is measured in Unicode scalar values (`chars()`).
pub fn segment(text: &str, config: &SegmentationConfig) -> Segmentation {
    let raw = split_sentences(text);
    let raw_sentence_count = raw.len();

    let sentences = raw
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > config.min_sentence_chars)
        .enumerate()
        .map(|(index, s)| Sentence::new(s, index))
        .collect();

    Segmentation {
        sentences,
        words: tokenize_words(text),
        raw_sentence_count,
    }
}
