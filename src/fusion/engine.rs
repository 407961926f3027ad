//! Merge-and-rank engine combining both channels into one fused list.

use std::cmp::Ordering;

use ahash::AHashMap;
use tracing::debug;

use super::normalizer::{NormalizationStrategy, ScoreNormalizer};
use super::stats::ScoreStatistics;
use super::types::{FusionCandidate, FusedHit};
use crate::channel::ChannelHit;

/// Fusion engine: merges the two channels' candidates by id, normalizes
/// each channel's contribution, and produces a single deterministically
/// ordered ranked list.
///
/// The output order is total: fused score descending, then id ascending as
/// the tie-break. The tie-break is load-bearing — it is what keeps cursor
/// resolution deterministic when two hits round to the same fused score.
#[derive(Debug, Clone)]
pub struct FusionEngine {
    lexical_weight: f64,
    vector_weight: f64,
    normalizer: ScoreNormalizer,
}

impl FusionEngine {
    /// Create a new fusion engine.
    ///
    /// Weights are re-normalized to sum to 1 at fusion time, so `{2, 2}`
    /// behaves identically to `{0.5, 0.5}`. Both weights 0 is the
    /// degenerate case: every fused score is defined as 0.
    pub fn new(
        lexical_weight: f64,
        vector_weight: f64,
        strategy: NormalizationStrategy,
        apply_sigmoid: bool,
    ) -> Self {
        Self {
            lexical_weight,
            vector_weight,
            normalizer: ScoreNormalizer::new(strategy, apply_sigmoid),
        }
    }

    /// Merge, normalize, fuse, and rank both channels' hits.
    pub fn fuse<T>(
        &self,
        lexical_hits: Vec<ChannelHit<T>>,
        vector_hits: Vec<ChannelHit<T>>,
    ) -> Vec<FusedHit<T>> {
        let lexical_count = lexical_hits.len();
        let vector_count = vector_hits.len();

        let candidates = self.merge(lexical_hits, vector_hits);

        // Per-channel statistics over the deduplicated raw scores.
        let lexical_scores: Vec<f64> = candidates
            .values()
            .filter_map(|c| c.lexical_score)
            .collect();
        let vector_scores: Vec<f64> = candidates.values().filter_map(|c| c.vector_score).collect();
        let lexical_stats = ScoreStatistics::calculate(&lexical_scores);
        let vector_stats = ScoreStatistics::calculate(&vector_scores);

        let weight_sum = self.lexical_weight + self.vector_weight;

        let mut results: Vec<FusedHit<T>> = candidates
            .into_iter()
            .map(|(id, candidate)| {
                // A side missing from one channel fuses as raw 0 normalized
                // against that channel's statistics, never as the mean.
                let norm_lexical = self
                    .normalizer
                    .normalize(candidate.lexical_score.unwrap_or(0.0), &lexical_stats);
                let norm_vector = self
                    .normalizer
                    .normalize(candidate.vector_score.unwrap_or(0.0), &vector_stats);

                let fused_score = if weight_sum == 0.0 {
                    0.0
                } else {
                    (self.lexical_weight / weight_sum) * norm_lexical
                        + (self.vector_weight / weight_sum) * norm_vector
                };

                FusedHit {
                    id,
                    fused_score,
                    lexical_score: candidate.lexical_score.map(|_| norm_lexical),
                    vector_score: candidate.vector_score.map(|_| norm_vector),
                    payload: candidate.payload,
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.fused_score
                .partial_cmp(&a.fused_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        debug!(
            lexical_hits = lexical_count,
            vector_hits = vector_count,
            fused = results.len(),
            "fused channel results"
        );

        results
    }

    /// Accumulate the union of ids across both channels.
    ///
    /// Id uniqueness within the fused list is enforced here: a duplicate id
    /// within one channel keeps the higher raw score, and an id present in
    /// both channels keeps the lexical payload.
    fn merge<T>(
        &self,
        lexical_hits: Vec<ChannelHit<T>>,
        vector_hits: Vec<ChannelHit<T>>,
    ) -> AHashMap<String, FusionCandidate<T>> {
        let mut candidates: AHashMap<String, FusionCandidate<T>> =
            AHashMap::with_capacity(lexical_hits.len() + vector_hits.len());

        for hit in lexical_hits {
            candidates
                .entry(hit.id)
                .and_modify(|candidate| {
                    let best = candidate.lexical_score.unwrap_or(f64::NEG_INFINITY);
                    candidate.lexical_score = Some(best.max(hit.raw_score));
                })
                .or_insert_with(|| FusionCandidate::from_lexical(hit.raw_score, hit.payload));
        }

        for hit in vector_hits {
            candidates
                .entry(hit.id)
                .and_modify(|candidate| {
                    let best = candidate.vector_score.unwrap_or(f64::NEG_INFINITY);
                    candidate.vector_score = Some(best.max(hit.raw_score));
                })
                .or_insert_with(|| FusionCandidate::from_vector(hit.raw_score, hit.payload));
        }

        candidates
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new(0.5, 0.5, NormalizationStrategy::default(), true)
    }
}
