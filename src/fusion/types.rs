//! Types and data structures for score fusion.

use serde::{Deserialize, Serialize};

/// Merged per-id view of both channels, before fusion.
///
/// A candidate missing from one channel keeps `None` on that side; at
/// fusion time the missing side is treated as raw score 0 and normalized
/// against that channel's statistics (absence is "no evidence", not
/// "average evidence"), so a hit present in only one channel is never
/// silently dropped.
#[derive(Debug, Clone)]
pub struct FusionCandidate<T> {
    /// Raw lexical score, if the lexical channel returned this id.
    pub lexical_score: Option<f64>,
    /// Raw vector score, if the vector channel returned this id.
    pub vector_score: Option<f64>,
    /// Payload carried through from the channel hit.
    pub payload: T,
}

impl<T> FusionCandidate<T> {
    /// Create a candidate seen first in the lexical channel.
    pub fn from_lexical(raw_score: f64, payload: T) -> Self {
        Self {
            lexical_score: Some(raw_score),
            vector_score: None,
            payload,
        }
    }

    /// Create a candidate seen first in the vector channel.
    pub fn from_vector(raw_score: f64, payload: T) -> Self {
        Self {
            lexical_score: None,
            vector_score: Some(raw_score),
            payload,
        }
    }
}

/// One entry of the final fused ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedHit<T> {
    /// Identifier of the matched object, unique within the list.
    pub id: String,
    /// Combined, weighted score on the normalized scale.
    pub fused_score: f64,
    /// Normalized lexical contribution, when the lexical channel matched.
    pub lexical_score: Option<f64>,
    /// Normalized vector contribution, when the vector channel matched.
    pub vector_score: Option<f64>,
    /// Payload carried through fusion untouched.
    pub payload: T,
}
