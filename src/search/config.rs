//! Configuration for hybrid search.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::channel::FailurePolicy;
use crate::fusion::NormalizationStrategy;

/// Configuration for hybrid search fusion and pagination.
///
/// One explicit struct with documented defaults per field, rather than
/// options scattered across call sites. Weights do not need to sum to 1;
/// they are re-normalized at fusion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Weight of the lexical channel's normalized contribution.
    /// Default: 0.5.
    pub lexical_weight: f64,
    /// Weight of the vector channel's normalized contribution.
    /// Default: 0.5.
    pub vector_weight: f64,
    /// Normalization strategy for raw channel scores. Default: z-score.
    pub normalization: NormalizationStrategy,
    /// Squash z-scores through a sigmoid to bound them into (0, 1).
    /// Only meaningful for the z-score strategy. Default: true.
    pub apply_sigmoid: bool,
    /// Server-enforced maximum page size; larger client requests are
    /// clamped down to this. Default: 50.
    pub hard_limit_cap: usize,
    /// Page size when the client omits one. Default: 10.
    pub default_limit: usize,
    /// Each channel is asked for `overfetch_factor × page limit`
    /// candidates so fusion has enough to rank even after overlap.
    /// Default: 2.
    pub overfetch_factor: usize,
    /// Per-channel execution timeout. Default: 5 seconds.
    pub channel_timeout: Duration,
    /// What happens when a channel fails or times out. Default: fail the
    /// whole request.
    pub failure_policy: FailurePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lexical_weight: 0.5,
            vector_weight: 0.5,
            normalization: NormalizationStrategy::ZScore,
            apply_sigmoid: true,
            hard_limit_cap: 50,
            default_limit: 10,
            overfetch_factor: 2,
            channel_timeout: Duration::from_secs(5),
            failure_policy: FailurePolicy::Fail,
        }
    }
}
