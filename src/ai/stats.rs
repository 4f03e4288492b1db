//! Per-decision search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `choose_sequence` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Legal sequences returned by the rules engine.
    pub candidates: u32,

    /// Candidates left after merging sequences that reach the same position.
    pub distinct_positions: u32,

    /// Opponent rolls sampled across all candidates.
    pub lookahead_samples: u32,

    /// Opponent reply positions evaluated (cache misses only).
    pub reply_positions: u32,

    /// Total time spent (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reply positions evaluated per second.
    #[must_use]
    pub fn evaluations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.reply_positions as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
