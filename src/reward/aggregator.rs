use indexmap::IndexMap;
use tracing::debug;

use crate::config::RewardWeights;
use crate::metrics::{AgentId, AgentRoster, MetricsSnapshot};

use super::{ContributionCalculator, NormalizedScores, ScoreNormalizer};

/// Blends normalized team scores and per-agent contribution into one
/// clamped reward per roster member.
///
/// Planning and communication are team-wide signals shared by every
/// agent; only the contribution term is individual. Agents without
/// milestone data still receive a reward driven by the team terms.
pub struct RewardAggregator {
    weights: RewardWeights,
}

impl RewardAggregator {
    pub fn new(weights: RewardWeights) -> Self {
        Self { weights }
    }

    /// Compute rewards for every agent in the roster, in roster order.
    /// Total function: no inputs make this fail.
    pub fn rewards(
        &self,
        roster: &AgentRoster,
        snapshot: &MetricsSnapshot,
    ) -> IndexMap<AgentId, f64> {
        let scores = ScoreNormalizer::latest(snapshot);
        self.rewards_with_scores(roster, snapshot, scores)
    }

    /// Same as `rewards`, reusing already-normalized team scores so a
    /// caller assembling a package normalizes only once per cycle.
    pub fn rewards_with_scores(
        &self,
        roster: &AgentRoster,
        snapshot: &MetricsSnapshot,
        scores: NormalizedScores,
    ) -> IndexMap<AgentId, f64> {
        let calc = ContributionCalculator::new(snapshot);
        let team_term = self.weights.planning * scores.planning
            + self.weights.communication * scores.communication;

        let mut rewards = IndexMap::with_capacity(roster.len());
        for agent_id in roster.ids() {
            let ratio = calc.ratio(agent_id);
            let reward = (team_term + self.weights.contribution * ratio).clamp(0.0, 1.0);
            debug!(
                agent = %agent_id,
                reward,
                contribution = ratio,
                "agent reward computed"
            );
            rewards.insert(agent_id.clone(), reward);
        }
        rewards
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn roster(ids: &[&str]) -> AgentRoster {
        ids.iter()
            .map(|id| (id.to_string(), format!("{} profile", id)))
            .collect()
    }

    fn snapshot(milestones: &[(&str, u64)], total: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            agent_milestones: milestones
                .iter()
                .map(|(id, n)| (id.to_string(), *n))
                .collect::<IndexMap<_, _>>(),
            total_milestones: total,
            ..Default::default()
        }
    }

    #[test]
    fn test_two_agent_scenario() {
        let roster = roster(&["a", "b"]);
        let mut snapshot = snapshot(&[("a", 3), ("b", 1)], 4);
        snapshot.planning_scores = vec![4.0];
        snapshot.communication_scores = vec![-1.0];

        let rewards = RewardAggregator::new(RewardWeights::default()).rewards(&roster, &snapshot);

        // planning 4.0 -> 0.8, communication sentinel -> 0.0
        assert!((rewards["a"] - 0.545).abs() < 1e-9);
        assert!((rewards["b"] - 0.395).abs() < 1e-9);
    }

    #[test]
    fn test_rewards_cover_roster_not_just_milestone_holders() {
        let roster = roster(&["a", "idle"]);
        let snapshot = snapshot(&[("a", 4)], 4);

        let rewards = RewardAggregator::new(RewardWeights::default()).rewards(&roster, &snapshot);

        // Both score histories empty -> team terms are 0.7 * 0.6 = 0.42.
        assert!((rewards["idle"] - 0.42).abs() < 1e-9);
        assert!((rewards["a"] - 0.72).abs() < 1e-9);
    }

    #[test]
    fn test_rewards_are_clamped() {
        let roster = roster(&["a"]);
        let mut snapshot = snapshot(&[("a", 4)], 4);
        snapshot.planning_scores = vec![50.0];
        snapshot.communication_scores = vec![50.0];

        let rewards = RewardAggregator::new(RewardWeights::default()).rewards(&roster, &snapshot);
        assert_eq!(rewards["a"], 1.0);
    }

    #[test]
    fn test_empty_roster_empty_rewards() {
        let rewards = RewardAggregator::new(RewardWeights::default())
            .rewards(&AgentRoster::new(), &MetricsSnapshot::default());
        assert!(rewards.is_empty());
    }

    #[test]
    fn test_reward_map_follows_roster_order() {
        let roster = roster(&["late", "early"]);
        let snapshot = snapshot(&[("early", 3), ("late", 1)], 4);

        let rewards = RewardAggregator::new(RewardWeights::default()).rewards(&roster, &snapshot);

        let ids: Vec<_> = rewards.keys().cloned().collect();
        assert_eq!(ids, vec!["late", "early"]);
    }
}
