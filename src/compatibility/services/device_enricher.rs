use crate::compatibility::domain::{
    latest_compatible_os, EnrichedDevice, FleetDevice, SupportMatrix, DEVICE_NAME_FACT,
    HARDWARE_MODEL_FACT, NOT_AVAILABLE, POLICY_ID_FACT,
};

/// DeviceEnricher - joins a fleet device with its resolved policy name and
/// the support matrix.
///
/// Pure: all network access (policy resolution) happens before `enrich` is
/// called, so the result depends only on its arguments.
pub struct DeviceEnricher;

impl DeviceEnricher {
    /// Policy identifier to resolve, or `None` when the fact is missing or not a string
    pub fn policy_id(device: &FleetDevice) -> Option<&str> {
        device.string_fact(POLICY_ID_FACT)
    }

    /// Builds the report row for `device`.
    ///
    /// # Arguments
    /// * `device` - Device record from the fleet API
    /// * `policy_name` - Already resolved policy name (or its `N/A` / `ERROR` sentinel)
    /// * `matrix` - Support matrix used to derive the latest compatible OS
    pub fn enrich(
        device: &FleetDevice,
        policy_name: String,
        matrix: &SupportMatrix,
    ) -> EnrichedDevice {
        let name = device.string_fact_or(DEVICE_NAME_FACT, NOT_AVAILABLE);
        let hardware_model = device.string_fact_or(HARDWARE_MODEL_FACT, NOT_AVAILABLE);
        let latest = latest_compatible_os(matrix, &hardware_model);

        EnrichedDevice {
            agent_id: device.agent_id.clone(),
            name,
            hardware_model,
            policy_name,
            latest_compatible_os: latest,
        }
    }
}
