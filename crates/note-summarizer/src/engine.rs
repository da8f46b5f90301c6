//! Summarization engine: segmentation → scoring → selection → assembly.
//!
//! Pure over its inputs. Every call builds its own tables and keeps nothing
//! afterwards, so one [`Summarizer`] can serve any number of callers.

use crate::config::SummarizerConfig;
use crate::error::SummarizerResult;
use crate::processing::segment;
use crate::scoring::{strategy_for, ScoringContext, ScoringStrategy};
use crate::selection::select;
use crate::summary::{assemble, compression_ratio, word_count};
use crate::types::{LengthPreset, SelectedSentence, SummaryResult};

pub struct Summarizer {
    config: SummarizerConfig,
    strategy: Box<dyn ScoringStrategy>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .field("strategy", &self.strategy.mode())
            .finish()
    }
}

impl Summarizer {
    /// Build a summarizer using the scoring mode named in `config`.
    ///
    /// The config is used as given; call [`SummarizerConfig::validate`] first
    /// or use [`Summarizer::try_new`] for configs built in code.
    pub fn new(config: SummarizerConfig) -> Self {
        let strategy = strategy_for(&config.scoring);
        Self { config, strategy }
    }

    /// Validate `config`, then build a summarizer from it.
    pub fn try_new(config: SummarizerConfig) -> SummarizerResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Build a summarizer with a caller-supplied scoring strategy.
    pub fn with_strategy(config: SummarizerConfig, strategy: Box<dyn ScoringStrategy>) -> Self {
        Self { config, strategy }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text` to roughly the size asked for by `preset`.
    ///
    /// Text without any `.`, `!` or `?` comes back unchanged with
    /// `fallback` set. Never fails.
    pub fn summarize(&self, text: &str, preset: LengthPreset) -> SummaryResult {
        let mut segmentation = segment(text, &self.config.segmentation);
        let original_word_count = word_count(text);
        let strategy_mode = self.strategy.mode();

        if segmentation.has_no_sentences() {
            tracing::debug!(
                words = original_word_count,
                "[Summarizer] No sentence boundaries, returning text unchanged"
            );
            return SummaryResult {
                summary_text: text.to_string(),
                original_word_count,
                summary_word_count: original_word_count,
                compression_percent: 0,
                sentences: Vec::new(),
                candidate_count: 0,
                target_count: 0,
                strategy: strategy_mode,
                fallback: true,
            };
        }

        let ctx = ScoringContext::build(
            text,
            &segmentation,
            self.config.scoring.max_key_phrases,
        );
        self.strategy.score_all(&mut segmentation.sentences, &ctx);

        let candidate_count = segmentation.sentences.len();
        let target_count = self.strategy.target_count(preset, candidate_count);
        let threshold = self
            .strategy
            .filters_near_duplicates()
            .then_some(self.config.selection.similarity_threshold);

        let selected = select(&segmentation.sentences, target_count, threshold);
        let summary_text = assemble(&selected);
        let summary_word_count = word_count(&summary_text);

        tracing::debug!(
            strategy = strategy_mode.as_str(),
            preset = preset.as_str(),
            candidates = candidate_count,
            key_phrases = ctx.key_phrases.len(),
            target = target_count,
            selected = selected.len(),
            "[Summarizer] Summary assembled"
        );

        SummaryResult {
            summary_text,
            original_word_count,
            summary_word_count,
            compression_percent: compression_ratio(original_word_count, summary_word_count),
            sentences: selected.iter().map(SelectedSentence::from).collect(),
            candidate_count,
            target_count,
            strategy: strategy_mode,
            fallback: false,
        }
    }
}

/// Summarize with the default configuration.
pub fn summarize(text: &str, preset: LengthPreset) -> SummaryResult {
    Summarizer::default().summarize(text, preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummarizerError;
    use crate::analysis::similarity;
    use crate::scoring::ScoringMode;

    const EXAMPLE: &str = "This is a test. This is only a test. Testing summarization works well. \
                           The quick brown fox jumps. The lazy dog sleeps here.";

    const ARTICLE: &str = "Rust is a systems programming language focused on safety. \
        The Rust compiler enforces memory safety without a garbage collector. \
        Ownership and borrowing are the core ideas behind memory safety in Rust. \
        Many developers enjoy the helpful compiler error messages. \
        Cargo is the package manager and build tool for Rust projects. \
        Crates published on the registry can be shared across projects. \
        Concurrency in Rust benefits from the same ownership rules. \
        Data races are prevented at compile time by the type system. \
        The community maintains extensive documentation and learning material. \
        Overall, Rust offers memory safety and speed for systems programming.";

    /// Position of each selected sentence inside the source text.
    fn offsets(source: &str, result: &SummaryResult) -> Vec<usize> {
        result
            .sentences
            .iter()
            .map(|s| source.find(&s.text).expect("selected sentence comes from source"))
            .collect()
    }

    #[test]
    fn test_example_short_preset() {
        let result = summarize(EXAMPLE, LengthPreset::Short);
        assert!(!result.fallback);
        assert_eq!(result.candidate_count, 5);
        assert!((1..=2).contains(&result.sentences.len()));
        assert_eq!(result.original_word_count, 23);
        assert!(result.compression_percent > 0);
        assert!(EXAMPLE.contains(&result.summary_text));
    }

    #[test]
    fn test_no_punctuation_returns_text_verbatim() {
        let text = "no punctuation here";
        let result = summarize(text, LengthPreset::Short);
        assert!(result.fallback);
        assert_eq!(result.summary_text, text);
        assert_eq!(result.compression_percent, 0);
        assert!(result.sentences.is_empty());
    }

    #[test]
    fn test_empty_text_falls_back() {
        let result = summarize("", LengthPreset::Long);
        assert!(result.fallback);
        assert_eq!(result.summary_text, "");
        assert_eq!(result.original_word_count, 0);
        assert_eq!(result.compression_percent, 0);
    }

    #[test]
    fn test_only_short_sentences_gives_empty_summary() {
        let result = summarize("Yes. No. Maybe so.", LengthPreset::Medium);
        assert!(!result.fallback);
        assert_eq!(result.candidate_count, 0);
        assert_eq!(result.summary_text, "");
        assert_eq!(result.summary_word_count, 0);
        assert_eq!(result.compression_percent, 100);
    }

    #[test]
    fn test_original_order_preserved() {
        for preset in [LengthPreset::Short, LengthPreset::Medium, LengthPreset::Long] {
            let result = summarize(ARTICLE, preset);
            let positions = offsets(ARTICLE, &result);
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{preset}");
            let indices: Vec<usize> = result.sentences.iter().map(|s| s.index).collect();
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_respects_target_counts() {
        let short = summarize(ARTICLE, LengthPreset::Short);
        let medium = summarize(ARTICLE, LengthPreset::Medium);
        let long = summarize(ARTICLE, LengthPreset::Long);

        assert_eq!(short.candidate_count, 10);
        assert_eq!(short.target_count, 2);
        assert_eq!(medium.target_count, 4);
        assert_eq!(long.target_count, 6);
        assert!(short.target_count <= medium.target_count);
        assert!(medium.target_count <= long.target_count);

        for result in [&short, &medium, &long] {
            assert!(result.sentences.len() <= result.target_count);
        }
    }

    #[test]
    fn test_summary_is_diverse() {
        let text = "The server crashed during the nightly backup job. \
                    The server crashed during the nightly backup job again. \
                    Engineers traced the failure to a full disk. \
                    A larger volume was provisioned the next morning. \
                    Backups have run cleanly since the fix was deployed.";
        let result = summarize(text, LengthPreset::Long);
        for (i, a) in result.sentences.iter().enumerate() {
            for b in &result.sentences[i + 1..] {
                assert!(similarity(&a.text, &b.text) < 0.7, "{} / {}", a.text, b.text);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let first = summarize(ARTICLE, LengthPreset::Medium);
        let second = summarize(ARTICLE, LengthPreset::Medium);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compression_in_range() {
        for preset in [LengthPreset::Short, LengthPreset::Medium, LengthPreset::Long] {
            let result = summarize(ARTICLE, preset);
            assert!(result.summary_word_count <= result.original_word_count);
            assert!((0..=100).contains(&result.compression_percent));
        }
    }

    #[test]
    fn test_unknown_preset_behaves_as_medium() {
        let preset: LengthPreset = "enormous".parse().unwrap();
        assert_eq!(
            summarize(ARTICLE, preset),
            summarize(ARTICLE, LengthPreset::Medium)
        );
    }

    #[test]
    fn test_legacy_mode() {
        let mut config = SummarizerConfig::default();
        config.scoring.mode = ScoringMode::Legacy;
        let summarizer = Summarizer::new(config);

        let result = summarizer.summarize(ARTICLE, LengthPreset::Medium);
        assert_eq!(result.strategy, ScoringMode::Legacy);
        // min(5, ceil(0.4 * 10))
        assert_eq!(result.target_count, 4);
        assert_eq!(result.sentences.len(), 4);
        let positions = offsets(ARTICLE, &result);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let mut config = SummarizerConfig::default();
        config.scoring.min_words = 50;
        config.scoring.max_words = 1;
        assert!(matches!(
            Summarizer::try_new(config),
            Err(SummarizerError::InvalidConfig(_))
        ));

        let summarizer = Summarizer::try_new(SummarizerConfig::default()).unwrap();
        assert!(!summarizer.summarize(ARTICLE, LengthPreset::Short).fallback);
    }

    #[test]
    fn test_custom_strategy() {
        use crate::scoring::{ScoringContext, ScoringStrategy};
        use crate::types::Sentence;

        /// Prefers later sentences.
        struct Recency;

        impl ScoringStrategy for Recency {
            fn mode(&self) -> ScoringMode {
                ScoringMode::Advanced
            }

            fn score(&self, sentence: &Sentence, _ctx: &ScoringContext) -> f64 {
                sentence.index as f64
            }
        }

        let summarizer = Summarizer::with_strategy(SummarizerConfig::default(), Box::new(Recency));
        let result = summarizer.summarize(ARTICLE, LengthPreset::Short);
        let indices: Vec<usize> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![8, 9]);
    }
}
