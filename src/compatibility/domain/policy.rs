use dashmap::DashMap;
use serde::Deserialize;

/// A named device grouping in the fleet API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Policy {
    #[serde(rename = "policyId", alias = "ID", alias = "id")]
    pub id: String,
    #[serde(rename = "parent", default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl Policy {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            name: name.into(),
        }
    }
}

/// Per-run memo of resolved policies, keyed by policy identifier.
///
/// Append-only: entries are never evicted or replaced. Backed by a
/// concurrent map so it can be shared if device processing is parallelised.
#[derive(Debug, Default)]
pub struct PolicyCache {
    entries: DashMap<String, Policy>,
}

impl PolicyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, policy_id: &str) -> Option<Policy> {
        self.entries.get(policy_id).map(|entry| entry.value().clone())
    }

    /// Stores `policy` under `policy_id` unless an entry already exists,
    /// and returns the cached value.
    pub fn insert(&self, policy_id: &str, policy: Policy) -> Policy {
        self.entries
            .entry(policy_id.to_string())
            .or_insert(policy)
            .value()
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
