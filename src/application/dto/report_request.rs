/// Default number of devices requested per fleet API page
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Largest page size accepted by the fleet API
pub const MAX_PER_PAGE: u32 = 1000;

/// ReportRequest - Internal request DTO for the compatibility report use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Only devices in policies with these names (case-sensitive); empty means all devices
    pub policy_names: Vec<String>,
    /// Only devices whose latest compatible OS is one of these major versions; empty means all
    pub os_versions: Vec<u32>,
    /// Devices requested per page
    pub per_page: u32,
}

impl ReportRequest {
    pub fn new(policy_names: Vec<String>, os_versions: Vec<u32>, per_page: u32) -> Self {
        Self {
            policy_names,
            os_versions,
            per_page,
        }
    }

    /// Request for every device, unfiltered
    pub fn all_devices() -> Self {
        Self::new(vec![], vec![], DEFAULT_PER_PAGE)
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::all_devices()
    }
}
