use indexmap::IndexMap;

use super::AgentId;

/// Read-only view of the external evaluator/metrics store.
///
/// The engine consumes this through `MetricsSnapshot::from_source` at the
/// start of a cycle; retries, caching, and I/O failures are the store's
/// concern, never the engine's.
pub trait MetricsSource {
    /// Completed milestone count per agent, in stable input order.
    fn agent_kpis(&self) -> IndexMap<AgentId, u64>;

    /// Team-wide milestone total for the cycle.
    fn total_milestones(&self) -> u64;

    /// Planning score history, oldest first. Values are 1-5 or the
    /// -1 sentinel.
    fn planning_scores(&self) -> Vec<f64>;

    /// Communication score history, same domain as planning scores.
    fn communication_scores(&self) -> Vec<f64>;
}
