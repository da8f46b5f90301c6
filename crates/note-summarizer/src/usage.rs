//! Session usage counters.
//!
//! Kept apart from the engine: callers that want running totals inject a
//! [`UsageRecorder`] into whatever drives summarization (see
//! [`crate::service::AsyncSummarizer`]).

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub summarizations_count: u64,
    pub total_characters_processed: u64,
    /// Running mean of per-call character compression, in percent
    pub average_compression_ratio: f64,
}

impl UsageStats {
    fn record(&mut self, original_chars: usize, summary_chars: usize) {
        self.summarizations_count += 1;
        self.total_characters_processed += original_chars as u64;

        let ratio = if original_chars == 0 {
            0.0
        } else {
            (1.0 - summary_chars as f64 / original_chars as f64) * 100.0
        };
        let n = self.summarizations_count as f64;
        self.average_compression_ratio = (self.average_compression_ratio * (n - 1.0) + ratio) / n;
    }
}

pub trait UsageRecorder: Send + Sync {
    /// Record one completed summarization, sizes in characters.
    fn record(&self, original_chars: usize, summary_chars: usize);

    fn snapshot(&self) -> UsageStats;

    fn reset(&self);
}

/// In-memory recorder; lives as long as the session that owns it.
#[derive(Debug, Default)]
pub struct UsageTracker {
    stats: Mutex<UsageStats>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UsageRecorder for UsageTracker {
    fn record(&self, original_chars: usize, summary_chars: usize) {
        self.stats.lock().record(original_chars, summary_chars);
    }

    fn snapshot(&self) -> UsageStats {
        *self.stats.lock()
    }

    fn reset(&self) {
        *self.stats.lock() = UsageStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_running_average() {
        let tracker = UsageTracker::new();
        tracker.record(100, 25);
        tracker.record(200, 100);

        let stats = tracker.snapshot();
        assert_eq!(stats.summarizations_count, 2);
        assert_eq!(stats.total_characters_processed, 300);
        // mean of 75% and 50%
        assert!((stats.average_compression_ratio - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_input_does_not_poison_average() {
        let tracker = UsageTracker::new();
        tracker.record(0, 0);
        let stats = tracker.snapshot();
        assert_eq!(stats.summarizations_count, 1);
        assert_eq!(stats.average_compression_ratio, 0.0);
        assert!(!stats.average_compression_ratio.is_nan());
    }

    #[test]
    fn test_reset() {
        let tracker = UsageTracker::new();
        tracker.record(10, 5);
        tracker.reset();
        assert_eq!(tracker.snapshot(), UsageStats::default());
    }

    #[test]
    fn test_shared_across_threads() {
        let tracker = Arc::new(UsageTracker::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        tracker.record(100, 50);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = tracker.snapshot();
        assert_eq!(stats.summarizations_count, 100);
        assert_eq!(stats.total_characters_processed, 10_000);
        assert!((stats.average_compression_ratio - 50.0).abs() < 1e-9);
    }
}
