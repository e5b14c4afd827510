use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque agent identifier, unique within a run.
pub type AgentId = String;

/// Complete roster of participating agents, mapping each id to its
/// free-text profile description. The profile text is carried for the
/// downstream templating layer; only the key set (and its order) drives
/// reward computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRoster {
    profiles: IndexMap<AgentId, String>,
}

impl AgentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, agent_id: impl Into<AgentId>, profile: impl Into<String>) {
        self.profiles.insert(agent_id.into(), profile.into());
    }

    /// Agent ids in roster order. This order is the key order of the
    /// computed reward map.
    pub fn ids(&self) -> impl Iterator<Item = &AgentId> {
        self.profiles.keys()
    }

    pub fn profile(&self, agent_id: &str) -> Option<&str> {
        self.profiles.get(agent_id).map(String::as_str)
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.profiles.contains_key(agent_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl From<IndexMap<AgentId, String>> for AgentRoster {
    fn from(profiles: IndexMap<AgentId, String>) -> Self {
        Self { profiles }
    }
}

impl FromIterator<(AgentId, String)> for AgentRoster {
    fn from_iter<I: IntoIterator<Item = (AgentId, String)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_preserves_insertion_order() {
        let mut roster = AgentRoster::new();
        roster.insert("writer", "drafts the report");
        roster.insert("reviewer", "checks the draft");
        roster.insert("editor", "finalizes wording");

        let ids: Vec<_> = roster.ids().cloned().collect();
        assert_eq!(ids, vec!["writer", "reviewer", "editor"]);
    }

    #[test]
    fn test_roster_profile_lookup() {
        let mut roster = AgentRoster::new();
        roster.insert("scout", "gathers sources");

        assert_eq!(roster.profile("scout"), Some("gathers sources"));
        assert_eq!(roster.profile("ghost"), None);
        assert!(roster.contains("scout"));
        assert_eq!(roster.len(), 1);
    }
}
