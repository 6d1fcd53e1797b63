use serde::Serialize;

/// One condition of a fleet API device search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSearchFilter {
    pub audit_field: String,
    pub operation: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: serde_json::Value,
}

impl DeviceSearchFilter {
    /// Selects devices whose policy is one of `policy_ids`
    pub fn policy_ids(policy_ids: &[String]) -> Self {
        Self {
            audit_field: "policy_ids".to_string(),
            operation: "contains".to_string(),
            value_type: "list".to_string(),
            value: serde_json::Value::from(policy_ids.to_vec()),
        }
    }
}

/// The `query` object of a device search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceQuery {
    pub filters: Vec<DeviceSearchFilter>,
}

impl DeviceQuery {
    pub fn with_filter(filter: DeviceSearchFilter) -> Self {
        Self {
            filters: vec![filter],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
