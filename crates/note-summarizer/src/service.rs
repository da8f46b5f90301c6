//! Async entry point for UI-style callers.
//!
//! Wraps the synchronous [`Summarizer`] so it can run off the async
//! executor, applies the caller-side input checks, and feeds an optional
//! usage recorder. The result is delivered whole or not at all.

use serde::Serialize;
use std::sync::Arc;

use crate::engine::Summarizer;
use crate::error::{SummarizerError, SummarizerResult};
use crate::types::{LengthPreset, SummaryResult};
use crate::usage::{UsageRecorder, UsageStats};

/// Inputs shorter than this still run, but with a warning.
pub const MIN_RECOMMENDED_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputWarning {
    ShortInput { chars: usize },
}

impl std::fmt::Display for InputWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShortInput { chars } => write!(
                f,
                "input has {chars} characters; at least {MIN_RECOMMENDED_CHARS} give better summaries"
            ),
        }
    }
}

/// A finished summary plus any warnings raised about the input.
#[derive(Debug, Clone, Serialize)]
pub struct Summarization {
    pub result: SummaryResult,
    pub warnings: Vec<InputWarning>,
}

/// Reject empty input; flag input that is too short to summarize well.
pub fn check_input(text: &str) -> SummarizerResult<Vec<InputWarning>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SummarizerError::EmptyInput);
    }

    let chars = trimmed.chars().count();
    let mut warnings = Vec::new();
    if chars < MIN_RECOMMENDED_CHARS {
        tracing::warn!(chars, min = MIN_RECOMMENDED_CHARS, "[AsyncSummarizer] Short input");
        warnings.push(InputWarning::ShortInput { chars });
    }
    Ok(warnings)
}

pub struct AsyncSummarizer {
    inner: Arc<Summarizer>,
    usage: Option<Arc<dyn UsageRecorder>>,
}

impl AsyncSummarizer {
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            inner: Arc::new(summarizer),
            usage: None,
        }
    }

    /// Attach a recorder that sees every successful summarization.
    pub fn with_usage(mut self, recorder: Arc<dyn UsageRecorder>) -> Self {
        self.usage = Some(recorder);
        self
    }

    pub fn usage(&self) -> Option<UsageStats> {
        self.usage.as_ref().map(|u| u.snapshot())
    }

    /// Summarize on the blocking pool. Input is trimmed first.
    pub async fn summarize(
        &self,
        text: &str,
        preset: LengthPreset,
    ) -> SummarizerResult<Summarization> {
        let warnings = check_input(text)?;
        let text = text.trim().to_string();
        let summarizer = Arc::clone(&self.inner);

        let (text, result) = tokio::task::spawn_blocking(move || {
            let result = summarizer.summarize(&text, preset);
            (text, result)
        })
        .await?;

        if let Some(usage) = &self.usage {
            usage.record(text.chars().count(), result.summary_text.chars().count());
        }

        Ok(Summarization { result, warnings })
    }
}

impl Default for AsyncSummarizer {
    fn default() -> Self {
        Self::new(Summarizer::default())
    }
}
