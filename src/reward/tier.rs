use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::RewardThresholds;

/// Feedback band for a computed reward. The downstream templating layer
/// selects its register (reinforce, nudge, correct) from this instead of
/// re-deriving band logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RewardTier {
    /// At or above the high threshold: positive reinforcement.
    Incentive,
    /// Between the bands: targeted improvement guidance.
    Optimization,
    /// Below the low threshold: corrective feedback.
    Correction,
}

impl RewardTier {
    pub fn classify(reward: f64, thresholds: &RewardThresholds) -> Self {
        if reward >= thresholds.high {
            Self::Incentive
        } else if reward < thresholds.low {
            Self::Correction
        } else {
            Self::Optimization
        }
    }

    pub fn is_incentive(&self) -> bool {
        matches!(self, Self::Incentive)
    }

    pub fn is_correction(&self) -> bool {
        matches!(self, Self::Correction)
    }
}
