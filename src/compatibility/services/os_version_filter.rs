use crate::compatibility::domain::{EnrichedDevice, LatestCompatibleOs};
use crate::shared::Result;

/// Maximum number of OS versions accepted in one filter
const MAX_OS_VERSIONS: usize = 64;

/// Filter value that selects devices with no supported OS
pub const UNSUPPORTED_VERSION: u32 = 0;

/// OsVersionFilter - keeps devices whose latest compatible OS is one of the
/// requested major versions.
///
/// The value `0` matches devices whose hardware is unsupported.
#[derive(Debug, Clone, Default)]
pub struct OsVersionFilter {
    versions: Vec<u32>,
}

impl OsVersionFilter {
    /// Creates a filter from the requested major versions
    ///
    /// # Errors
    /// Returns an error if more than `MAX_OS_VERSIONS` values are given
    pub fn new(versions: Vec<u32>) -> Result<Self> {
        if versions.len() > MAX_OS_VERSIONS {
            anyhow::bail!(
                "Too many OS versions to filter by: {} (maximum: {})",
                versions.len(),
                MAX_OS_VERSIONS
            );
        }

        let mut versions = versions;
        versions.sort_unstable();
        versions.dedup();

        Ok(Self { versions })
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn versions(&self) -> &[u32] {
        &self.versions
    }

    pub fn matches(&self, latest: &LatestCompatibleOs) -> bool {
        match latest {
            LatestCompatibleOs::Supported {
                version: Some(version),
                ..
            } => self.versions.contains(version),
            LatestCompatibleOs::Supported { version: None, .. } => false,
            LatestCompatibleOs::Unsupported => self.versions.contains(&UNSUPPORTED_VERSION),
        }
    }

    /// Keeps matching devices in their original order.
    ///
    /// An empty filter keeps everything.
    pub fn filter_devices(&self, devices: Vec<EnrichedDevice>) -> Vec<EnrichedDevice> {
        if self.is_empty() {
            return devices;
        }

        devices
            .into_iter()
            .filter(|device| {
                let keep = self.matches(&device.latest_compatible_os);
                tracing::debug!(
                    device_name = %device.name,
                    max_os = %device.latest_compatible_os,
                    keep,
                    "evaluated device against OS version filter"
                );
                keep
            })
            .collect()
    }
}
