//! Joining selected sentences and the word-count statistics shown to callers.

use crate::types::Sentence;

/// Selected sentence texts joined by single spaces.
pub fn assemble(selected: &[Sentence]) -> String {
    selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Percentage of words removed, rounded half away from zero. Zero when the
/// original has no words.
pub fn compression_ratio(original_words: usize, summary_words: usize) -> i64 {
    if original_words == 0 {
        return 0;
    }
    let kept = summary_words as f64 / original_words as f64;
    ((1.0 - kept) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_joins_with_single_space() {
        let selected = vec![
            Sentence::new("First sentence here.", 0),
            Sentence::new("Third sentence here!", 2),
        ];
        assert_eq!(assemble(&selected), "First sentence here. Third sentence here!");
        assert_eq!(assemble(&[]), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  one two\nthree\tfour  "), 4);
        assert_eq!(word_count("hyphen-ated words, with punctuation."), 4);
    }

    #[test]
    fn test_compression_ratio() {
        assert_eq!(compression_ratio(100, 25), 75);
        assert_eq!(compression_ratio(3, 1), 67);
        assert_eq!(compression_ratio(10, 10), 0);
        assert_eq!(compression_ratio(0, 0), 0);
        assert_eq!(compression_ratio(0, 5), 0);
    }

    #[test]
    fn test_compression_ratio_bounds() {
        for original in 1..50 {
            for summary in 0..=original {
                let pct = compression_ratio(original, summary);
                assert!((0..=100).contains(&pct), "{original}/{summary} -> {pct}");
            }
        }
    }
}
