use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::{AgentId, MetricsSnapshot};

use super::ContributionCalculator;

/// One entry of the contribution ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContributionRank {
    pub agent_id: AgentId,
    pub ratio: f64,
}

/// Ranks agents by contribution ratio, descending.
///
/// Only agents present in `agent_milestones` appear here; the reward map,
/// by contrast, covers the whole roster.
pub struct ContributionRanker;

impl ContributionRanker {
    pub fn rank(snapshot: &MetricsSnapshot) -> Vec<ContributionRank> {
        let calc = ContributionCalculator::new(snapshot);
        let mut ranking: Vec<ContributionRank> = snapshot
            .agent_milestones
            .keys()
            .map(|agent_id| ContributionRank {
                agent_id: agent_id.clone(),
                ratio: calc.ratio(agent_id),
            })
            .collect();

        // Stable sort: equal ratios keep milestone-map insertion order.
        ranking.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        ranking
    }
}
