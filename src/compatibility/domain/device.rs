use super::fact::{deserialize_facts, DeviceFact};
use serde::Deserialize;
use std::collections::HashMap;

/// Fact holding the identifier of the policy a device is assigned to
pub const POLICY_ID_FACT: &str = "policy_id";

/// Fact holding the user-visible device name
pub const DEVICE_NAME_FACT: &str = "device_name";

/// Fact holding the hardware model identifier (e.g. `Mac14,2`)
pub const HARDWARE_MODEL_FACT: &str = "product_name";

/// A device record as returned by the fleet API device search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetDevice {
    #[serde(rename = "agentid", default)]
    pub agent_id: String,
    #[serde(default, deserialize_with = "deserialize_facts")]
    pub facts: HashMap<String, DeviceFact>,
}

impl FleetDevice {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            facts: HashMap::new(),
        }
    }

    /// Builder-style helper, mostly for tests and fixtures
    pub fn with_fact(mut self, name: &str, fact: DeviceFact) -> Self {
        self.facts.insert(name.to_string(), fact);
        self
    }

    pub fn fact(&self, name: &str) -> Option<&DeviceFact> {
        self.facts.get(name)
    }

    /// Returns the fact's value if it is present and a string
    pub fn string_fact(&self, name: &str) -> Option<&str> {
        self.fact(name).and_then(|fact| fact.value.as_str())
    }

    /// Returns the fact's string value, or `fallback` when it is absent or not a string
    pub fn string_fact_or(&self, name: &str, fallback: &str) -> String {
        self.string_fact(name).unwrap_or(fallback).to_string()
    }
}
