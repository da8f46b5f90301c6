pub mod segmenter;

pub use segmenter::{segment, split_sentences, tokenize_words, Segmentation};
