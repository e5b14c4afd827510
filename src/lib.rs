pub mod config;
pub mod error;
pub mod feedback;
pub mod metrics;
pub mod reward;

pub use config::{EngineConfig, RewardThresholds, RewardWeights};
pub use error::{FeedbackError, Result};
pub use feedback::{FeedbackEngine, FeedbackPackage};
pub use metrics::{AgentId, AgentRoster, MetricsSnapshot, MetricsSource};
pub use reward::{
    ContributionCalculator, ContributionRank, ContributionRanker, NormalizedScores,
    RewardAggregator, RewardTier, ScoreNormalizer,
};
