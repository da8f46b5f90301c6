//! Lexical overlap between sentences.

use std::collections::HashSet;

use crate::processing::tokenize_words;

/// Jaccard similarity of the lowercase word sets of `a` and `b`.
///
/// Returns a value in `[0, 1]`; two texts without any words score 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    word_set_similarity(&tokenize_words(a), &tokenize_words(b))
}

/// Jaccard similarity over already-tokenized words. Duplicates collapse.
pub fn word_set_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let left: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let right: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = left.intersection(&right).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overlap() {
        assert!((similarity("the cat sat", "the cat ran") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_identical_and_case_insensitive() {
        assert!((similarity("The Cat sat.", "the cat SAT!") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(similarity("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_empty_union_is_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("...", "!?"), 0.0);
    }

    #[test]
    fn test_duplicates_collapse() {
        // {a, b} vs {a}: 1 / 2
        assert!((similarity("a a a b", "a a") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let x = "Deep learning uses neural networks.";
        let y = "Neural networks power deep search.";
        assert_eq!(similarity(x, y), similarity(y, x));
    }
}
