use crate::compatibility::domain::{DeviceQuery, FleetDevice, Policy};
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Scope of a policy search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyQuery {
    /// Only the policies with these identifiers
    ByIds(Vec<String>),
    /// Every policy in the account
    All,
}

impl PolicyQuery {
    pub fn by_id(policy_id: &str) -> Self {
        PolicyQuery::ByIds(vec![policy_id.to_string()])
    }

    /// JSON request body understood by the policy query endpoint
    pub fn to_payload(&self) -> Value {
        match self {
            PolicyQuery::ByIds(ids) => json!({ "policies": ids }),
            PolicyQuery::All => json!({}),
        }
    }
}

/// FleetRepository port for the device-management API
///
/// This port abstracts the remote fleet API (e.g. Addigy) used to list
/// managed devices and to look up the policies they belong to.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// Fetches every device matching `query`, following pagination to the last page
    ///
    /// # Arguments
    /// * `per_page` - Number of devices requested per page
    /// * `query` - Optional server-side filter; `None` fetches all devices
    ///
    /// # Errors
    /// Returns an error if any page request fails, returns a non-success
    /// status, or cannot be decoded. No partial result is returned.
    async fn search_devices(
        &self,
        per_page: u32,
        query: Option<&DeviceQuery>,
    ) -> Result<Vec<FleetDevice>>;

    /// Fetches the policies selected by `query`
    ///
    /// # Errors
    /// Returns an error if the request fails, returns a non-success status,
    /// or the body is not a JSON array of policies.
    async fn search_policies(&self, query: &PolicyQuery) -> Result<Vec<Policy>>;
}
