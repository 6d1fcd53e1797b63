//! Canned Addigy and SOFA responses served from mockito for end-to-end runs.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const API_KEY: &str = "e2e-secret";

/// A running pair of mock servers plus the config file pointing at them
pub struct MockServices {
    pub addigy: ServerGuard,
    pub sofa: ServerGuard,
}

impl MockServices {
    pub fn start() -> Self {
        Self {
            addigy: Server::new(),
            sofa: Server::new(),
        }
    }

    pub fn api_base_url(&self) -> String {
        self.addigy.url()
    }

    pub fn feed_url(&self) -> String {
        format!("{}/v1/macos_data_feed.json", self.sofa.url())
    }

    /// Serves a feed with one supported and one unsupported model
    pub fn mock_feed(&mut self) -> Mock {
        self.sofa
            .mock("GET", "/v1/macos_data_feed.json")
            .with_status(200)
            .with_body(
                json!({
                    "Models": {
                        "Mac14,2": {
                            "MarketingName": "MacBook Air (M2, 2022)",
                            "SupportedOS": ["Sequoia 15", "Sonoma 14"],
                            "OSVersions": [15, 14]
                        },
                        "MacBookPro11,5": {
                            "MarketingName": "MacBook Pro (15-inch, Mid 2015)",
                            "SupportedOS": ["Monterey 12"],
                            "OSVersions": [12]
                        }
                    }
                })
                .to_string(),
            )
            .create()
    }

    /// Serves `devices` as a single page
    pub fn mock_devices(&mut self, devices: Vec<Value>) -> Mock {
        let count = devices.len();
        self.addigy
            .mock("POST", "/devices")
            .match_header("x-api-key", API_KEY)
            .with_status(200)
            .with_body(
                json!({
                    "items": devices,
                    "metadata": { "page": 1, "per_page": 100, "page_count": 1, "total": count }
                })
                .to_string(),
            )
            .create()
    }

    /// Serves one policy for an id lookup
    pub fn mock_policy(&mut self, id: &str, name: &str) -> Mock {
        self.addigy
            .mock("POST", "/oa/policies/query")
            .match_body(Matcher::Json(json!({ "policies": [id] })))
            .with_status(200)
            .with_body(json!([{ "policyId": id, "parent": null, "name": name }]).to_string())
            .create()
    }

    /// Serves the full policy list for name resolution
    pub fn mock_all_policies(&mut self, policies: &[(&str, &str)]) -> Mock {
        let body: Vec<Value> = policies
            .iter()
            .map(|(id, name)| json!({ "policyId": id, "parent": null, "name": name }))
            .collect();
        self.addigy
            .mock("POST", "/oa/policies/query")
            .match_body(Matcher::Json(json!({})))
            .with_status(200)
            .with_body(Value::Array(body).to_string())
            .create()
    }

    /// Writes a config file in `dir` pointing both clients at the mock servers
    pub fn write_config(&self, dir: &Path, file_name: &str, extra: &str) -> PathBuf {
        let path = dir.join(file_name);
        let content = format!(
            "api_base_url: {}\nfeed_url: {}\n{}",
            self.api_base_url(),
            self.feed_url(),
            extra
        );
        fs::write(&path, content).unwrap();
        path
    }
}

fn string_fact(value: &str) -> Value {
    json!({ "value": value, "type": "string", "error_msg": null })
}

/// A device record as the fleet API returns it
pub fn device_json(agent_id: &str, name: &str, model: &str, policy_id: Option<&str>) -> Value {
    let mut facts = json!({
        "device_name": string_fact(name),
        "product_name": string_fact(model),
    });
    if let Some(policy_id) = policy_id {
        facts["policy_id"] = string_fact(policy_id);
    }
    json!({ "agentid": agent_id, "facts": facts })
}
