//! Reward computation pipeline:
//! - `ScoreNormalizer`: latest team scores mapped into [0, 1]
//! - `ContributionCalculator`: per-agent milestone share
//! - `RewardAggregator`: weighted blend over the full roster
//! - `ContributionRanker`: stable descending contribution ranking
//! - `RewardTier`: feedback band for a computed reward

mod aggregator;
mod contribution;
mod normalizer;
mod ranking;
mod tier;

pub use aggregator::RewardAggregator;
pub use contribution::ContributionCalculator;
pub use normalizer::{NormalizedScores, ScoreNormalizer, DEFAULT_RAW_SCORE, NO_SCORE_SENTINEL};
pub use ranking::{ContributionRank, ContributionRanker};
pub use tier::RewardTier;
