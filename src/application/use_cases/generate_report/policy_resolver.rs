use crate::compatibility::domain::{Policy, PolicyCache};
use crate::ports::outbound::{FleetRepository, PolicyQuery};
use crate::shared::error::CompatError;
use crate::shared::Result;
use tracing::debug;

/// PolicyResolver resolves policy identifiers through a FleetRepository,
/// memoizing every successful lookup.
///
/// Devices are grouped by policy, so thousands of devices usually share a
/// handful of identifiers; only the first lookup of each goes to the network.
/// A resolver lives for one report run and is never shared between runs.
pub struct PolicyResolver<'a, R: FleetRepository> {
    inner: &'a R,
    cache: PolicyCache,
}

impl<'a, R: FleetRepository> PolicyResolver<'a, R> {
    /// Creates a resolver with an empty cache
    pub fn new(inner: &'a R) -> Self {
        Self {
            inner,
            cache: PolicyCache::new(),
        }
    }

    /// Returns the policy with identifier `policy_id`
    ///
    /// # Errors
    /// Returns an error if the lookup fails or does not yield exactly one
    /// policy. Failed lookups are not cached.
    pub async fn resolve_policy(&self, policy_id: &str) -> Result<Policy> {
        if let Some(policy) = self.cache.get(policy_id) {
            debug!(policy_id, policy_name = %policy.name, "cache hit for policy");
            return Ok(policy);
        }
        debug!(policy_id, "cache miss for policy");

        let mut policies = self
            .inner
            .search_policies(&PolicyQuery::by_id(policy_id))
            .await?;

        if policies.len() != 1 {
            return Err(CompatError::UnexpectedPolicyCount {
                policy_id: policy_id.to_string(),
                count: policies.len(),
            }
            .into());
        }

        let policy = self.cache.insert(policy_id, policies.remove(0));
        debug!(
            policy_id,
            cache_size = self.cache.len(),
            "added policy to cache"
        );
        Ok(policy)
    }

    /// Number of cached policies
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::domain::{DeviceQuery, FleetDevice};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock repository that tracks policy lookups
    struct CountingFleetRepository {
        policies: Vec<Policy>,
        call_count: AtomicUsize,
    }

    impl CountingFleetRepository {
        fn new(policies: Vec<Policy>) -> Self {
            Self {
                policies,
                call_count: AtomicUsize::new(0),
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FleetRepository for CountingFleetRepository {
        async fn search_devices(
            &self,
            _per_page: u32,
            _query: Option<&DeviceQuery>,
        ) -> Result<Vec<FleetDevice>> {
            Ok(vec![])
        }

        async fn search_policies(&self, query: &PolicyQuery) -> Result<Vec<Policy>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            match query {
                PolicyQuery::ByIds(ids) => Ok(self
                    .policies
                    .iter()
                    .filter(|p| ids.contains(&p.id))
                    .cloned()
                    .collect()),
                PolicyQuery::All => Ok(self.policies.clone()),
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_twice_issues_one_lookup() {
        let repo = CountingFleetRepository::new(vec![Policy::new("p-1", "Staff")]);
        let resolver = PolicyResolver::new(&repo);

        let first = resolver.resolve_policy("p-1").await.unwrap();
        assert_eq!(repo.get_call_count(), 1);

        let second = resolver.resolve_policy("p-1").await.unwrap();
        assert_eq!(repo.get_call_count(), 1);
        assert_eq!(first, second);
        assert_eq!(resolver.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_different_ids_cached_separately() {
        let repo = CountingFleetRepository::new(vec![
            Policy::new("p-1", "Staff"),
            Policy::new("p-2", "Lab"),
        ]);
        let resolver = PolicyResolver::new(&repo);

        assert_eq!(resolver.resolve_policy("p-1").await.unwrap().name, "Staff");
        assert_eq!(resolver.resolve_policy("p-2").await.unwrap().name, "Lab");
        assert_eq!(repo.get_call_count(), 2);
        assert_eq!(resolver.cache_size(), 2);
    }

    #[tokio::test]
    async fn test_zero_results_is_error_and_not_cached() {
        let repo = CountingFleetRepository::new(vec![]);
        let resolver = PolicyResolver::new(&repo);

        let err = resolver.resolve_policy("missing").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CompatError>(),
            Some(CompatError::UnexpectedPolicyCount { count: 0, .. })
        ));

        assert!(resolver.resolve_policy("missing").await.is_err());
        assert_eq!(repo.get_call_count(), 2);
        assert_eq!(resolver.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_multiple_results_is_error() {
        let repo = CountingFleetRepository::new(vec![
            Policy::new("dup", "Staff"),
            Policy::new("dup", "Staff copy"),
        ]);
        let resolver = PolicyResolver::new(&repo);

        let err = resolver.resolve_policy("dup").await.unwrap_err();
        assert!(err.to_string().contains("got 2, expected 1"));
    }
}
