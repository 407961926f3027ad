//! Score normalization for hybrid fusion.
//!
//! Normalizes raw channel scores to a bounded, comparable scale before they
//! are weighted and summed. Both strategies are monotone: a higher raw
//! score never normalizes below a lower one from the same channel.

use serde::{Deserialize, Serialize};

use super::stats::ScoreStatistics;

/// Normalization strategies for channel scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizationStrategy {
    /// Z-score normalization: `(raw - mean) / std`, optionally squashed
    /// through a sigmoid. The default: unbounded z-scores from one channel
    /// could otherwise dominate fusion regardless of weight.
    #[default]
    #[serde(rename = "zscore")]
    ZScore,
    /// Min-max normalization to [0, 1]: `(raw - min) / (max - min)`, with
    /// a zero range normalizing to 0.
    #[serde(rename = "minmax")]
    MinMax,
}

/// Score normalizer for one request.
///
/// Stateless apart from its strategy; the per-channel statistics are passed
/// in per call because they are recomputed for every request.
#[derive(Debug, Clone, Copy)]
pub struct ScoreNormalizer {
    strategy: NormalizationStrategy,
    apply_sigmoid: bool,
}

impl ScoreNormalizer {
    /// Create a new score normalizer.
    ///
    /// `apply_sigmoid` only affects the z-score strategy, bounding its
    /// output to (0, 1).
    pub fn new(strategy: NormalizationStrategy, apply_sigmoid: bool) -> Self {
        Self {
            strategy,
            apply_sigmoid,
        }
    }

    /// Normalize a raw score against its channel's statistics.
    pub fn normalize(&self, raw: f64, stats: &ScoreStatistics) -> f64 {
        match self.strategy {
            NormalizationStrategy::ZScore => {
                let z = (raw - stats.mean) / stats.std;
                if self.apply_sigmoid { sigmoid(z) } else { z }
            }
            NormalizationStrategy::MinMax => {
                let range = stats.range();
                if range == 0.0 {
                    0.0
                } else {
                    (raw - stats.min) / range
                }
            }
        }
    }
}

/// Logistic sigmoid, bounding any real number into (0, 1).
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
