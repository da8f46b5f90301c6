//! Export a finished summary as a plain-text report or JSON document.
//!
//! Only renders strings and suggests file names; writing them anywhere is up
//! to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::TextComplexity;
use crate::error::{SummarizerError, SummarizerResult};
use crate::types::{LengthPreset, SummaryResult};

const REPORT_TITLE: &str = "Note Summary";
const RULE_WIDTH: usize = 50;

/// Everything needed to export one summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub id: Uuid,
    pub original_text: String,
    pub summary: String,
    pub preset: LengthPreset,
    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub compression_percent: i64,
    pub complexity: TextComplexity,
    pub generated_at: DateTime<Utc>,
}

impl SummaryReport {
    pub fn new(original_text: &str, preset: LengthPreset, result: &SummaryResult) -> Self {
        Self::at(original_text, preset, result, Utc::now())
    }

    /// Same as [`SummaryReport::new`] with a fixed timestamp.
    pub fn at(
        original_text: &str,
        preset: LengthPreset,
        result: &SummaryResult,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_text: original_text.to_string(),
            summary: result.summary_text.clone(),
            preset,
            original_word_count: result.original_word_count,
            summary_word_count: result.summary_word_count,
            compression_percent: result.compression_percent,
            complexity: TextComplexity::analyze(original_text),
            generated_at,
        }
    }

    pub fn text_file_name(&self) -> String {
        format!("note-summary-{}.txt", self.generated_at.format("%Y-%m-%d"))
    }

    pub fn json_file_name(&self) -> String {
        format!("note-summary-data-{}.json", self.generated_at.format("%Y-%m-%d"))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    id: &'a Uuid,
    original_text: &'a str,
    summary: &'a str,
    metadata: JsonMetadata<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMetadata<'a> {
    summary_length: LengthPreset,
    original_word_count: usize,
    summary_word_count: usize,
    compression_ratio: String,
    generated_at: String,
    text_complexity: &'a TextComplexity,
}

/// Human-readable report: banner, original, summary, then a footer of stats.
pub fn export_as_text(report: &SummaryReport) -> String {
    format!(
        "{title}\n{rule}\n\nOriginal Text:\n{original}\n\nSummary:\n{summary}\n\n\
         Generated on: {generated}\nSummary Length: {preset}\nCompression Ratio: {ratio}%",
        title = REPORT_TITLE,
        rule = "=".repeat(RULE_WIDTH),
        original = report.original_text,
        summary = report.summary,
        generated = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        preset = report.preset,
        ratio = report.compression_percent,
    )
}

/// Pretty-printed JSON with the summary stats under `metadata`.
pub fn export_as_json(report: &SummaryReport) -> SummarizerResult<String> {
    let export = JsonExport {
        id: &report.id,
        original_text: &report.original_text,
        summary: &report.summary,
        metadata: JsonMetadata {
            summary_length: report.preset,
            original_word_count: report.original_word_count,
            summary_word_count: report.summary_word_count,
            compression_ratio: format!("{}%", report.compression_percent),
            generated_at: report.generated_at.to_rfc3339(),
            text_complexity: &report.complexity,
        },
    };
    serde_json::to_string_pretty(&export).map_err(SummarizerError::Export)
}
