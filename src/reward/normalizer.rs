//! Normalization of raw 1-5 evaluator scores into [0, 1].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::MetricsSnapshot;

/// Raw score assumed when a score history is still empty. Deliberately
/// optimistic: "no data yet" is not the same as "scored zero".
pub const DEFAULT_RAW_SCORE: f64 = 3.0;

/// Sentinel the evaluator emits for an explicit zero score.
pub const NO_SCORE_SENTINEL: f64 = -1.0;

/// Raw scores live on a 1-5 scale.
const SCORE_SCALE: f64 = 5.0;

/// Latest team-level scores after normalization. Shared by every agent in
/// the roster; carried in the feedback package for traceability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedScores {
    pub planning: f64,
    pub communication: f64,
}

/// Pure, total mapping from score histories to normalized team scores.
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Normalize the most recent planning and communication scores from
    /// the snapshot.
    pub fn latest(snapshot: &MetricsSnapshot) -> NormalizedScores {
        NormalizedScores {
            planning: Self::normalize_latest(&snapshot.planning_scores),
            communication: Self::normalize_latest(&snapshot.communication_scores),
        }
    }

    /// Take the last score of a history (or the default when empty), map
    /// the sentinel to 0.0, and rescale into [0, 1].
    pub fn normalize_latest(scores: &[f64]) -> f64 {
        let raw = scores.last().copied().unwrap_or(DEFAULT_RAW_SCORE);
        let raw = if raw == NO_SCORE_SENTINEL { 0.0 } else { raw };
        raw / SCORE_SCALE
    }
}
