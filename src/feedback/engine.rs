use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::metrics::{AgentRoster, MetricsSnapshot};
use crate::reward::{ContributionRanker, RewardAggregator, RewardTier, ScoreNormalizer};

use super::FeedbackPackage;

/// Runs one evaluation cycle: normalize scores, blend rewards, rank
/// contributions, and assemble the feedback package.
///
/// The engine holds no per-cycle state beyond a convenience cache of the
/// most recent package, which is swapped wholesale on every `evaluate`
/// call. Independent cycles with their own snapshots may run concurrently.
pub struct FeedbackEngine {
    config: EngineConfig,
    latest: RwLock<Option<Arc<FeedbackPackage>>>,
}

impl FeedbackEngine {
    /// Create an engine with a validated configuration. Weight and
    /// threshold invariant violations fail here, before any cycle runs.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            latest: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the feedback package for one cycle. Pure with respect to
    /// its inputs: identical snapshot and roster yield identical rewards
    /// and ranking.
    pub fn evaluate(
        &self,
        roster: &AgentRoster,
        snapshot: &MetricsSnapshot,
    ) -> Arc<FeedbackPackage> {
        let scores = ScoreNormalizer::latest(snapshot);
        debug!(
            planning = scores.planning,
            communication = scores.communication,
            "normalized latest team scores"
        );

        let agent_rewards = RewardAggregator::new(self.config.weights)
            .rewards_with_scores(roster, snapshot, scores);
        let reward_tiers = agent_rewards
            .iter()
            .map(|(agent_id, reward)| {
                (
                    agent_id.clone(),
                    RewardTier::classify(*reward, &self.config.thresholds),
                )
            })
            .collect();
        let contribution_ranking = ContributionRanker::rank(snapshot);

        let package = Arc::new(FeedbackPackage {
            agent_rewards,
            reward_tiers,
            contribution_ranking,
            normalized_scores: scores,
            total_milestones: snapshot.total_milestones,
            weights: self.config.weights,
            generated_at: Utc::now(),
        });

        *self.latest.write() = Some(Arc::clone(&package));
        info!(
            agents = package.agent_rewards.len(),
            "feedback package assembled"
        );
        package
    }

    /// The package from the most recent `evaluate` call, if any.
    pub fn latest(&self) -> Option<Arc<FeedbackPackage>> {
        self.latest.read().clone()
    }
}
