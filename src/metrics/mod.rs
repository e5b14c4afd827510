//! Evaluation-cycle inputs: the metrics snapshot, the agent roster, and
//! the read-only seam to the external evaluator store.

mod roster;
mod snapshot;
mod source;

pub use roster::{AgentId, AgentRoster};
pub use snapshot::MetricsSnapshot;
pub use source::MetricsSource;
