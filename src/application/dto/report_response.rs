use crate::compatibility::domain::EnrichedDevice;

/// ReportResponse - Internal response DTO from the compatibility report use case
///
/// Carries the report rows plus a few counters the CLI prints at the end of a run.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Report rows, in fetch order, after OS version filtering
    pub devices: Vec<EnrichedDevice>,
    /// Devices returned by the fleet API before OS version filtering
    pub fetched_count: usize,
    /// Devices whose policy lookup failed (policy name recorded as `ERROR`)
    pub policy_error_count: usize,
}

impl ReportResponse {
    pub fn new(devices: Vec<EnrichedDevice>, fetched_count: usize, policy_error_count: usize) -> Self {
        Self {
            devices,
            fetched_count,
            policy_error_count,
        }
    }
}
