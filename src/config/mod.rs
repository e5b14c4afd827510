//! Configuration types for the reward engine:
//! - `RewardWeights`: blend weights for the reward function
//! - `RewardThresholds`: band boundaries for feedback tiering
//! - `EngineConfig`: top-level configuration with validation

mod settings;

pub use settings::{EngineConfig, RewardThresholds, RewardWeights};
