//! Per-channel score statistics.

use serde::{Deserialize, Serialize};

/// Statistics computed over one channel's raw scores for one request.
///
/// The standard deviation is never stored as exactly 0: whenever it would
/// be (empty input, a single score, or all scores identical) it is
/// substituted with 1 so the z-score division stays well-defined.
///
/// # Examples
///
/// ```
/// use fusor::fusion::stats::ScoreStatistics;
///
/// let stats = ScoreStatistics::calculate(&[10.0, 5.0]);
/// assert_eq!(stats.mean, 7.5);
/// assert_eq!(stats.min, 5.0);
/// assert_eq!(stats.max, 10.0);
/// assert!(stats.std > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    /// Population mean of the scores.
    pub mean: f64,
    /// Population standard deviation, clamped to a minimum of 1 when 0.
    pub std: f64,
    /// Smallest score.
    pub min: f64,
    /// Largest score.
    pub max: f64,
}

impl ScoreStatistics {
    /// Compute statistics over one channel's raw scores.
    ///
    /// Empty input yields `{mean: 0, std: 1, min: 0, max: 0}`; a single
    /// score `s` yields `{mean: s, std: 1, min: s, max: s}`.
    pub fn calculate(scores: &[f64]) -> Self {
        match scores {
            [] => Self {
                mean: 0.0,
                std: 1.0,
                min: 0.0,
                max: 0.0,
            },
            [score] => Self {
                mean: *score,
                std: 1.0,
                min: *score,
                max: *score,
            },
            _ => {
                let n = scores.len() as f64;
                let mean = scores.iter().sum::<f64>() / n;
                let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
                let std = variance.sqrt();
                let min = scores.iter().fold(f64::INFINITY, |a, &b| a.min(b));
                let max = scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

                Self {
                    mean,
                    std: if std == 0.0 { 1.0 } else { std },
                    min,
                    max,
                }
            }
        }
    }

    /// Range of the scores (`max - min`).
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for ScoreStatistics {
    fn default() -> Self {
        Self::calculate(&[])
    }
}
