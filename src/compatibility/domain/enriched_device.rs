use super::support_matrix::LatestCompatibleOs;

/// Fallback for a device field the fleet API did not report (or reported with the wrong type)
pub const NOT_AVAILABLE: &str = "N/A";

/// Policy name recorded when the policy lookup for a device failed
pub const POLICY_LOOKUP_ERROR: &str = "ERROR";

/// A device joined with its policy name and compatibility, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedDevice {
    pub agent_id: String,
    pub name: String,
    pub hardware_model: String,
    pub policy_name: String,
    pub latest_compatible_os: LatestCompatibleOs,
}

impl EnrichedDevice {
    pub fn new(
        agent_id: impl Into<String>,
        name: impl Into<String>,
        hardware_model: impl Into<String>,
        policy_name: impl Into<String>,
        latest_compatible_os: LatestCompatibleOs,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            name: name.into(),
            hardware_model: hardware_model.into(),
            policy_name: policy_name.into(),
            latest_compatible_os,
        }
    }

    pub fn policy_lookup_failed(&self) -> bool {
        self.policy_name == POLICY_LOOKUP_ERROR
    }
}
