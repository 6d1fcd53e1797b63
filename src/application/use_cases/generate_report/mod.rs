use crate::application::dto::{ReportRequest, ReportResponse, MAX_PER_PAGE};
use crate::compatibility::domain::{
    DeviceQuery, DeviceSearchFilter, EnrichedDevice, FleetDevice, SupportMatrix, NOT_AVAILABLE,
    POLICY_LOOKUP_ERROR,
};
use crate::compatibility::services::{match_policy_names, DeviceEnricher, OsVersionFilter};
use crate::ports::outbound::{FleetRepository, PolicyQuery, ProgressReporter, SupportFeed};
use crate::shared::error::CompatError;
use crate::shared::Result;
use anyhow::Context;
use tracing::debug;

mod policy_resolver;

pub use policy_resolver::PolicyResolver;

/// GenerateReportUseCase - Core use case for the OS compatibility report
///
/// This use case orchestrates the enrichment pipeline using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `FR` - FleetRepository implementation
/// * `SF` - SupportFeed implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<FR, SF, PR> {
    fleet_repository: FR,
    support_feed: SF,
    progress_reporter: PR,
}

impl<FR, SF, PR> GenerateReportUseCase<FR, SF, PR>
where
    FR: FleetRepository,
    SF: SupportFeed,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(fleet_repository: FR, support_feed: SF, progress_reporter: PR) -> Self {
        Self {
            fleet_repository,
            support_feed,
            progress_reporter,
        }
    }

    /// Executes one report run
    ///
    /// # Arguments
    /// * `request` - Policy and OS version filters plus the page size
    ///
    /// # Returns
    /// ReportResponse with the enriched devices in fetch order
    ///
    /// # Errors
    /// Any failure to fetch the support matrix or a device page, or a policy
    /// filter that matches nothing, aborts the run. A failed policy lookup
    /// for one device does not: that device's policy name becomes `ERROR`.
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        Self::validate_request(&request)?;
        let os_filter = OsVersionFilter::new(request.os_versions.clone())?;

        // Step 1: Fetch the support matrix
        let matrix = self.fetch_support_matrix().await?;

        // Step 2: Resolve the policy filter, if any
        let query = self.build_device_query(&request.policy_names).await?;

        // Step 3: Fetch every device
        let devices = self.fetch_devices(request.per_page, query.as_ref()).await?;

        // Step 4: Enrich devices with policy names and compatibility
        let (enriched, policy_error_count) = self.enrich_devices(&devices, &matrix).await;

        // Step 5: Apply the OS version filter
        let filtered = self.apply_os_version_filter(enriched, &os_filter);

        Ok(ReportResponse::new(
            filtered,
            devices.len(),
            policy_error_count,
        ))
    }

    fn validate_request(request: &ReportRequest) -> Result<()> {
        if request.per_page == 0 || request.per_page > MAX_PER_PAGE {
            return Err(CompatError::Validation {
                message: format!(
                    "per_page must be between 1 and {}, got {}",
                    MAX_PER_PAGE, request.per_page
                ),
            }
            .into());
        }
        Ok(())
    }

    async fn fetch_support_matrix(&self) -> Result<SupportMatrix> {
        self.progress_reporter.report("📡 Fetching SOFA data...");

        let matrix = self
            .support_feed
            .fetch_matrix()
            .await
            .context("fetching SOFA data")?;

        self.progress_reporter.report(&format!(
            "✅ Loaded support data for {} hardware model(s)",
            matrix.len()
        ));
        Ok(matrix)
    }

    /// Resolves policy names to a server-side device filter
    ///
    /// # Returns
    /// `None` when no policy names were requested
    ///
    /// # Errors
    /// Returns an error if the policy search fails or no requested name matches a policy
    async fn build_device_query(&self, policy_names: &[String]) -> Result<Option<DeviceQuery>> {
        if policy_names.is_empty() {
            return Ok(None);
        }

        self.progress_reporter.report(&format!(
            "🔎 Filtering by policies: {}",
            policy_names.join(", ")
        ));

        let policies = self
            .fleet_repository
            .search_policies(&PolicyQuery::All)
            .await
            .context("getting policies")?;

        let matched = match_policy_names(&policies, policy_names);
        if matched.policy_ids.is_empty() {
            return Err(CompatError::NoMatchingPolicies {
                names: policy_names.to_vec(),
            }
            .into());
        }

        for name in &matched.unmatched_names {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Policy '{}' did not match any policy.",
                name
            ));
        }

        debug!(policy_ids = ?matched.policy_ids, "device search filtered by policy");
        Ok(Some(DeviceQuery::with_filter(
            DeviceSearchFilter::policy_ids(&matched.policy_ids),
        )))
    }

    async fn fetch_devices(
        &self,
        per_page: u32,
        query: Option<&DeviceQuery>,
    ) -> Result<Vec<FleetDevice>> {
        self.progress_reporter.report(
            "📥 Fetching and processing info from Addigy. This may take a few minutes...",
        );

        let devices = self
            .fleet_repository
            .search_devices(per_page, query)
            .await
            .context("getting device data from Addigy")?;

        self.progress_reporter
            .report(&format!("✅ Fetched {} device(s)", devices.len()));
        Ok(devices)
    }

    /// Enriches every device in order with a fresh policy cache
    ///
    /// # Returns
    /// Tuple of (enriched devices, number of failed policy lookups)
    async fn enrich_devices(
        &self,
        devices: &[FleetDevice],
        matrix: &SupportMatrix,
    ) -> (Vec<EnrichedDevice>, usize) {
        let resolver = PolicyResolver::new(&self.fleet_repository);
        let total = devices.len();
        let mut enriched = Vec::with_capacity(total);
        let mut policy_errors = 0;

        for (idx, device) in devices.iter().enumerate() {
            let policy_name = Self::resolve_policy_name(&resolver, device).await;
            let row = DeviceEnricher::enrich(device, policy_name, matrix);

            if row.policy_lookup_failed() {
                policy_errors += 1;
            }

            debug!(
                agent_id = %row.agent_id,
                hardware_model = %row.hardware_model,
                marketing_name = matrix.marketing_name(&row.hardware_model).unwrap_or(NOT_AVAILABLE),
                latest_compatible_os = %row.latest_compatible_os,
                "processed device"
            );

            self.progress_reporter
                .report_progress(idx + 1, total, Some(&row.name));
            enriched.push(row);
        }

        if policy_errors > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Policy lookup failed for {} device(s); their policy name is recorded as {}.",
                policy_errors, POLICY_LOOKUP_ERROR
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Processed {} device(s) using {} distinct policy lookup(s)",
            total,
            resolver.cache_size()
        ));

        (enriched, policy_errors)
    }

    /// Policy name for a device's report row; never fails
    async fn resolve_policy_name(resolver: &PolicyResolver<'_, FR>, device: &FleetDevice) -> String {
        let Some(policy_id) = DeviceEnricher::policy_id(device) else {
            return NOT_AVAILABLE.to_string();
        };

        match resolver.resolve_policy(policy_id).await {
            Ok(policy) => policy.name,
            Err(e) => {
                debug!(policy_id, error = %e, "getting policy by id");
                POLICY_LOOKUP_ERROR.to_string()
            }
        }
    }

    fn apply_os_version_filter(
        &self,
        devices: Vec<EnrichedDevice>,
        filter: &OsVersionFilter,
    ) -> Vec<EnrichedDevice> {
        if filter.is_empty() {
            return devices;
        }

        let versions: Vec<String> = filter.versions().iter().map(|v| v.to_string()).collect();
        self.progress_reporter.report(&format!(
            "🔎 Filtering by OS version(s): {}",
            versions.join(", ")
        ));

        let original_count = devices.len();
        let filtered = filter.filter_devices(devices);
        self.progress_reporter.report(&format!(
            "✅ {} of {} device(s) match the OS version filter",
            filtered.len(),
            original_count
        ));
        filtered
    }
}
