use crate::compatibility::domain::SupportMatrix;
use crate::ports::outbound::SupportFeed;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// SofaClient adapter for the SOFA macOS data feed
///
/// This adapter implements the SupportFeed port with a single
/// unauthenticated GET. The feed is a static JSON document; there is no
/// retry and no cached fallback.
pub struct SofaClient {
    client: reqwest::Client,
    feed_url: String,
}

impl SofaClient {
    const DEFAULT_FEED_URL: &'static str = "https://sofafeed.macadmins.io/v1/macos_data_feed.json";
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new() -> Result<Self> {
        Self::with_feed_url(Self::DEFAULT_FEED_URL)
    }

    pub fn with_feed_url(feed_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(format!("mac-compat/{}", version))
            .build()?;

        Ok(Self {
            client,
            feed_url: feed_url.to_string(),
        })
    }
}

#[async_trait]
impl SupportFeed for SofaClient {
    async fn fetch_matrix(&self) -> Result<SupportMatrix> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .with_context(|| format!("sending request to {}", self.feed_url))?;

        if !response.status().is_success() {
            anyhow::bail!("SOFA feed returned status code {}", response.status());
        }

        let body = response.bytes().await.context("reading body")?;
        let matrix: SupportMatrix =
            serde_json::from_slice(&body).context("unmarshaling SOFA feed json")?;

        debug!(models = matrix.len(), "fetched SOFA support matrix");
        Ok(matrix)
    }
}
