use async_trait::async_trait;
use mac_compat::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock FleetRepository for testing
///
/// Serves a fixed device list and policy set, recording the device query
/// and counting policy searches.
#[derive(Default)]
pub struct MockFleetRepository {
    pub devices: Vec<FleetDevice>,
    pub policies: Vec<Policy>,
    pub failing_policy_ids: Vec<String>,
    pub should_fail: bool,
    policy_searches: AtomicUsize,
    last_query: Mutex<Option<DeviceQuery>>,
}

impl MockFleetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device: FleetDevice) -> Self {
        self.devices.push(device);
        self
    }

    pub fn with_policy(mut self, id: &str, name: &str) -> Self {
        self.policies.push(Policy::new(id, name));
        self
    }

    pub fn with_failing_policy(mut self, id: &str) -> Self {
        self.failing_policy_ids.push(id.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn policy_search_count(&self) -> usize {
        self.policy_searches.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<DeviceQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl FleetRepository for MockFleetRepository {
    async fn search_devices(
        &self,
        _per_page: u32,
        query: Option<&DeviceQuery>,
    ) -> Result<Vec<FleetDevice>> {
        if self.should_fail {
            anyhow::bail!("Mock fleet repository failure");
        }
        *self.last_query.lock().unwrap() = query.cloned();
        Ok(self.devices.clone())
    }

    async fn search_policies(&self, query: &PolicyQuery) -> Result<Vec<Policy>> {
        self.policy_searches.fetch_add(1, Ordering::SeqCst);
        match query {
            PolicyQuery::All => Ok(self.policies.clone()),
            PolicyQuery::ByIds(ids) => {
                if ids.iter().any(|id| self.failing_policy_ids.contains(id)) {
                    anyhow::bail!("Mock policy lookup failure");
                }
                Ok(self
                    .policies
                    .iter()
                    .filter(|p| ids.contains(&p.id))
                    .cloned()
                    .collect())
            }
        }
    }
}
