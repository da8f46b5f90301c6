//! Error type for the fallible edges of the crate.
//!
//! The summarization engine is total over any `&str`. Only the code around
//! it (config files, caller input checks, export, the async wrapper) fails.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("please enter some text to summarize")]
    EmptyInput,

    #[error("failed to serialize export: {0}")]
    Export(#[source] serde_json::Error),

    #[error("summarization task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type SummarizerResult<T> = std::result::Result<T, SummarizerError>;
