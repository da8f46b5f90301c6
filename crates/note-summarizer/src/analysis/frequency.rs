//! Word frequency and recurring key phrases.

use std::collections::HashMap;

use crate::processing::tokenize_words;

/// Words this short or shorter are ignored by the frequency table.
pub const MIN_COUNTED_WORD_LEN: usize = 3;
/// Words must be at least this long to take part in key phrases.
pub const MIN_PHRASE_WORD_LEN: usize = 4;

/// Occurrence counts of lowercase words longer than three characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
}

impl WordFrequency {
    /// Build from already-lowercased tokens.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            let word: &str = word.as_ref();
            if word.len() > MIN_COUNTED_WORD_LEN {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

/// Frequency table over the whole document.
pub fn word_frequency(text: &str) -> WordFrequency {
    WordFrequency::from_words(&tokenize_words(text))
}

/// Top recurring 2- and 3-word phrases in the document.
pub fn key_phrases(text: &str, limit: usize) -> Vec<String> {
    let words: Vec<String> = tokenize_words(text)
        .into_iter()
        .filter(|w| w.len() >= MIN_PHRASE_WORD_LEN)
        .collect();
    key_phrases_from_words(&words, limit)
}

/// Same as [`key_phrases`] over pre-filtered lowercase words.
///
/// Ranked by count, descending. Ties keep first-encounter order.
pub fn key_phrases_from_words<S: AsRef<str>>(words: &[S], limit: usize) -> Vec<String> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counted: Vec<(String, usize)> = Vec::new();

    let mut bump = |phrase: String| match slots.get(&phrase) {
        Some(&slot) => counted[slot].1 += 1,
        None => {
            slots.insert(phrase.clone(), counted.len());
            counted.push((phrase, 1));
        }
    };

    for i in 0..words.len().saturating_sub(1) {
        let first: &str = words[i].as_ref();
        let second: &str = words[i + 1].as_ref();
        bump(format!("{first} {second}"));

        if let Some(third) = words.get(i + 2) {
            let third: &str = third.as_ref();
            bump(format!("{first} {second} {third}"));
        }
    }

    counted.retain(|(_, count)| *count > 1);
    // sort_by is stable, so equal counts stay in encounter order
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
        .into_iter()
        .take(limit)
        .map(|(phrase, _)| phrase)
        .collect()
}
