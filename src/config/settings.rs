use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{FeedbackError, Result};

/// Tolerance for the weight-sum invariant. Weights are user-supplied
/// decimals, so exact float equality is too strict.
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

fn validate_ratio(value: f64, name: &str) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FeedbackError::Config(format!(
            "{} must be between 0.0 and 1.0, got {}",
            name, value
        )))
    }
}

/// Weights for the three reward signals. Must sum to 1.0 so the blended
/// reward stays in [0, 1] for in-range inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RewardWeights {
    pub planning: f64,
    pub communication: f64,
    pub contribution: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            planning: 0.4,
            communication: 0.3,
            contribution: 0.3,
        }
    }
}

impl RewardWeights {
    pub fn sum(&self) -> f64 {
        self.planning + self.communication + self.contribution
    }

    pub fn validate(&self) -> Result<()> {
        validate_ratio(self.planning, "weights.planning")?;
        validate_ratio(self.communication, "weights.communication")?;
        validate_ratio(self.contribution, "weights.contribution")?;

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(FeedbackError::InvalidWeights { sum });
        }
        Ok(())
    }
}

/// Band boundaries for reward tiering: rewards at or above `high` are
/// positively reinforced, rewards below `low` are flagged for correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RewardThresholds {
    pub high: f64,
    pub low: f64,
}

impl Default for RewardThresholds {
    fn default() -> Self {
        Self {
            high: 0.6,
            low: 0.3,
        }
    }
}

impl RewardThresholds {
    pub fn validate(&self) -> Result<()> {
        validate_ratio(self.high, "thresholds.high")?;
        validate_ratio(self.low, "thresholds.low")?;

        if self.low > self.high {
            return Err(FeedbackError::InvalidThresholds {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// Top-level engine configuration. Passed explicitly to `FeedbackEngine`
/// so concurrent evaluation cycles can run with different weight setups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: RewardWeights,
    pub thresholds: RewardThresholds,
}

impl EngineConfig {
    /// Parse a configuration from TOML and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.thresholds.validate()?;
        Ok(())
    }
}
