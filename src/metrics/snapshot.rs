use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{AgentId, MetricsSource};

/// Immutable source of truth for one evaluation cycle.
///
/// `agent_milestones` need not cover every roster member; agents without
/// an entry count as zero. Scores are 1-5 ratings with -1 standing in for
/// "explicitly scored zero". Insertion order of `agent_milestones` is the
/// tie-break order for the contribution ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSnapshot {
    pub agent_milestones: IndexMap<AgentId, u64>,
    pub total_milestones: u64,
    pub planning_scores: Vec<f64>,
    pub communication_scores: Vec<f64>,
}

impl MetricsSnapshot {
    /// Capture a snapshot from the external evaluator store. Queried once
    /// at the start of a cycle; the engine never reads the store again.
    pub fn from_source(source: &dyn MetricsSource) -> Self {
        Self {
            agent_milestones: source.agent_kpis(),
            total_milestones: source.total_milestones(),
            planning_scores: source.planning_scores(),
            communication_scores: source.communication_scores(),
        }
    }

    /// Milestone count for an agent, zero when the agent has no entry.
    pub fn milestones_for(&self, agent_id: &str) -> u64 {
        self.agent_milestones.get(agent_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubStore;

    impl MetricsSource for StubStore {
        fn agent_kpis(&self) -> IndexMap<AgentId, u64> {
            IndexMap::from([("a".to_string(), 2), ("b".to_string(), 1)])
        }

        fn total_milestones(&self) -> u64 {
            3
        }

        fn planning_scores(&self) -> Vec<f64> {
            vec![4.0]
        }

        fn communication_scores(&self) -> Vec<f64> {
            vec![3.0, 5.0]
        }
    }

    #[test]
    fn test_from_source_captures_all_fields() {
        let snapshot = MetricsSnapshot::from_source(&StubStore);

        assert_eq!(snapshot.total_milestones, 3);
        assert_eq!(snapshot.milestones_for("a"), 2);
        assert_eq!(snapshot.planning_scores, vec![4.0]);
        assert_eq!(snapshot.communication_scores, vec![3.0, 5.0]);
    }

    #[test]
    fn test_milestones_for_missing_agent_is_zero() {
        let snapshot = MetricsSnapshot::from_source(&StubStore);
        assert_eq!(snapshot.milestones_for("nobody"), 0);
    }
}
