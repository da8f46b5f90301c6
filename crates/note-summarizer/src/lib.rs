pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod processing;
pub mod scoring;
pub mod selection;
pub mod service;
pub mod summary;
pub mod types;
pub mod usage;

// Re-export primary types for convenience
pub use config::SummarizerConfig;
pub use engine::{summarize, Summarizer};
pub use error::{SummarizerError, SummarizerResult};
pub use export::{export_as_json, export_as_text, SummaryReport};
pub use scoring::{ScoringMode, ScoringStrategy};
pub use service::{AsyncSummarizer, InputWarning, Summarization};
pub use types::{LengthPreset, SelectedSentence, Sentence, SummaryResult};
pub use usage::{UsageRecorder, UsageStats, UsageTracker};

// Re-export common types
pub use error::{SummarizerError as Error, SummarizerResult as Result};
