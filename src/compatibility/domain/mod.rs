pub mod device;
pub mod enriched_device;
pub mod fact;
pub mod policy;
pub mod search_filter;
pub mod support_matrix;

pub use device::{FleetDevice, DEVICE_NAME_FACT, HARDWARE_MODEL_FACT, POLICY_ID_FACT};
pub use enriched_device::{EnrichedDevice, NOT_AVAILABLE, POLICY_LOOKUP_ERROR};
pub use fact::{DeviceFact, FactValue};
pub use policy::{Policy, PolicyCache};
pub use search_filter::{DeviceQuery, DeviceSearchFilter};
pub use support_matrix::{
    latest_compatible_os, LatestCompatibleOs, MacModel, SupportMatrix, UNSUPPORTED,
};
