use crate::compatibility::domain::{DeviceQuery, FleetDevice, Policy};
use crate::ports::outbound::{FleetRepository, PolicyQuery};
use crate::shared::error::CompatError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct DeviceSearchRequest<'a> {
    page: u32,
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a DeviceQuery>,
}

#[derive(Debug, Deserialize)]
struct DeviceSearchResponse {
    #[serde(default)]
    items: Vec<FleetDevice>,
    #[serde(default)]
    metadata: PageMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct PageMetadata {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    page_count: u32,
    #[serde(default)]
    total: u64,
}

/// AddigyClient adapter for the Addigy v2 API
///
/// This adapter implements the FleetRepository port. Every request carries
/// the `x-api-key` credential and JSON content negotiation headers; any
/// non-2xx status becomes [`CompatError::ApiError`] with the response body.
pub struct AddigyClient {
    client: reqwest::Client,
    base_url: String,
}

impl AddigyClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.addigy.com/api/v2";
    const TIMEOUT_SECONDS: u64 = 60;
    const DEVICES_PATH: &'static str = "devices";
    const POLICIES_PATH: &'static str = "oa/policies/query";

    /// Creates a client for the public Addigy API
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, Self::DEFAULT_BASE_URL)
    }

    /// Creates a client for an alternative API host
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut api_key_value =
            HeaderValue::from_str(api_key).context("API key is not a valid header value")?;
        api_key_value.set_sensitive(true);
        headers.insert("x-api-key", api_key_value);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(format!("mac-compat/{}", version))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POSTs `payload` as JSON to `path` and decodes the JSON response
    async fn post_json<P, T>(&self, path: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("sending request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompatError::ApiError {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .context("reading response body")?;

        serde_json::from_slice(&body)
            .with_context(|| format!("unmarshaling response from {} to json", url))
    }
}

#[async_trait]
impl FleetRepository for AddigyClient {
    async fn search_devices(
        &self,
        per_page: u32,
        query: Option<&DeviceQuery>,
    ) -> Result<Vec<FleetDevice>> {
        let mut devices = Vec::new();
        let mut page = 1;

        loop {
            let request = DeviceSearchRequest {
                page,
                per_page,
                query,
            };

            let response: DeviceSearchResponse = self
                .post_json(Self::DEVICES_PATH, &request)
                .await
                .with_context(|| format!("fetching device page {}", page))?;

            let batch_size = response.items.len();
            devices.extend(response.items);
            debug!(
                page,
                page_count = response.metadata.page_count,
                new_devices = batch_size,
                total_devices = devices.len(),
                reported_total = response.metadata.total,
                "got batch of devices from addigy"
            );

            if response.metadata.page >= response.metadata.page_count {
                break;
            }

            if response.metadata.page < page {
                anyhow::bail!(
                    "Addigy pagination did not advance: requested page {}, got page {} of {}",
                    page,
                    response.metadata.page,
                    response.metadata.page_count
                );
            }

            page += 1;
        }

        Ok(devices)
    }

    async fn search_policies(&self, query: &PolicyQuery) -> Result<Vec<Policy>> {
        let policies: Vec<Policy> = self
            .post_json(Self::POLICIES_PATH, &query.to_payload())
            .await
            .context("searching addigy policies")?;

        debug!(returned = policies.len(), ?query, "got policies from addigy");
        Ok(policies)
    }
}
