use crate::metrics::MetricsSnapshot;

/// Derives each agent's share of the team's completed milestones.
pub struct ContributionCalculator<'a> {
    snapshot: &'a MetricsSnapshot,
}

impl<'a> ContributionCalculator<'a> {
    pub fn new(snapshot: &'a MetricsSnapshot) -> Self {
        Self { snapshot }
    }

    /// Milestone share in [0, 1]. Agents without milestone data and the
    /// zero-total case both yield 0.0; there is no error path.
    pub fn ratio(&self, agent_id: &str) -> f64 {
        if self.snapshot.total_milestones == 0 {
            return 0.0;
        }
        self.snapshot.milestones_for(agent_id) as f64 / self.snapshot.total_milestones as f64
    }
}
