//! Document-level text analysis: frequency tables, key phrases, sentence
//! similarity and readability metrics.

pub mod complexity;
pub mod frequency;
pub mod similarity;

pub use complexity::{ComplexityLevel, TextComplexity};
pub use frequency::{key_phrases, word_frequency, WordFrequency};
pub use similarity::{similarity, word_set_similarity};
