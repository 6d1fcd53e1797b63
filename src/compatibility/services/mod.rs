mod device_enricher;
mod os_version_filter;
mod policy_matcher;

pub use device_enricher::DeviceEnricher;
pub use os_version_filter::{OsVersionFilter, UNSUPPORTED_VERSION};
pub use policy_matcher::{match_policy_names, PolicyNameMatch};
