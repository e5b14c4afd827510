use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::RewardWeights;
use crate::error::Result;
use crate::metrics::AgentId;
use crate::reward::{ContributionRank, NormalizedScores, RewardTier};

/// Immutable result of one evaluation cycle: the single hand-off artifact
/// for the templating and logging collaborators. Each cycle produces a
/// fresh instance; nothing accumulates across cycles.
///
/// The serde-derived field names are the serialization contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackPackage {
    /// Reward per roster member, in roster order.
    pub agent_rewards: IndexMap<AgentId, f64>,
    /// Feedback band per roster member.
    pub reward_tiers: IndexMap<AgentId, RewardTier>,
    /// Agents with milestone data, descending by contribution.
    pub contribution_ranking: Vec<ContributionRank>,
    /// Latest normalized team scores, kept for traceability.
    pub normalized_scores: NormalizedScores,
    pub total_milestones: u64,
    /// The weight configuration this cycle was computed with.
    pub weights: RewardWeights,
    pub generated_at: DateTime<Utc>,
}

impl FeedbackPackage {
    pub fn reward(&self, agent_id: &str) -> Option<f64> {
        self.agent_rewards.get(agent_id).copied()
    }

    pub fn tier(&self, agent_id: &str) -> Option<RewardTier> {
        self.reward_tiers.get(agent_id).copied()
    }

    pub fn top_contributor(&self) -> Option<&ContributionRank> {
        self.contribution_ranking.first()
    }

    /// Serialize for the external logging/persistence sink.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One-line digest for log output.
    pub fn summary(&self) -> String {
        let top = self
            .top_contributor()
            .map(|r| format!("{} ({:.0}%)", r.agent_id, r.ratio * 100.0))
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Rewards for {} agents, top contributor: {}, planning {:.2}, communication {:.2}, {} milestones",
            self.agent_rewards.len(),
            top,
            self.normalized_scores.planning,
            self.normalized_scores.communication,
            self.total_milestones,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> FeedbackPackage {
        FeedbackPackage {
            agent_rewards: IndexMap::from([("a".to_string(), 0.545), ("b".to_string(), 0.395)]),
            reward_tiers: IndexMap::from([
                ("a".to_string(), RewardTier::Optimization),
                ("b".to_string(), RewardTier::Optimization),
            ]),
            contribution_ranking: vec![
                ContributionRank {
                    agent_id: "a".to_string(),
                    ratio: 0.75,
                },
                ContributionRank {
                    agent_id: "b".to_string(),
                    ratio: 0.25,
                },
            ],
            normalized_scores: NormalizedScores {
                planning: 0.8,
                communication: 0.0,
            },
            total_milestones: 4,
            weights: RewardWeights::default(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_accessors() {
        let package = package();

        assert_eq!(package.reward("a"), Some(0.545));
        assert_eq!(package.reward("ghost"), None);
        assert_eq!(package.tier("b"), Some(RewardTier::Optimization));
        assert_eq!(package.top_contributor().unwrap().agent_id, "a");
    }

    #[test]
    fn test_json_round_trip() {
        let package = package();
        let json = package.to_json().unwrap();
        let restored: FeedbackPackage = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, package);
    }

    #[test]
    fn test_summary_digest() {
        let summary = package().summary();

        assert!(summary.contains("2 agents"));
        assert!(summary.contains("a (75%)"));
        assert!(summary.contains("4 milestones"));
    }
}
