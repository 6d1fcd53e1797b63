use async_trait::async_trait;
use mac_compat::prelude::*;
use std::collections::HashMap;

/// Mock SupportFeed for testing
pub struct MockSupportFeed {
    pub models: HashMap<String, MacModel>,
    pub should_fail: bool,
}

impl MockSupportFeed {
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
            should_fail: false,
        }
    }

    /// Adds a model whose supported OS list is `versions`, latest first
    pub fn with_model(mut self, hardware_model: &str, versions: &[u32]) -> Self {
        self.models.insert(
            hardware_model.to_string(),
            MacModel {
                marketing_name: format!("Test {}", hardware_model),
                supported_os: versions.iter().map(|v| v.to_string()).collect(),
                os_versions: versions.to_vec(),
            },
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            models: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockSupportFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SupportFeed for MockSupportFeed {
    async fn fetch_matrix(&self) -> Result<SupportMatrix> {
        if self.should_fail {
            anyhow::bail!("Mock support feed failure");
        }
        Ok(SupportMatrix::new(self.models.clone()))
    }
}
