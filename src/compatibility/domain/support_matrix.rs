use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Text rendered for hardware models with no supported OS
pub const UNSUPPORTED: &str = "Unsupported";

/// A hardware model's entry in the support feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MacModel {
    #[serde(rename = "MarketingName", default)]
    pub marketing_name: String,
    /// Supported OS names, latest first
    #[serde(rename = "SupportedOS", default)]
    pub supported_os: Vec<String>,
    /// Numeric major versions, parallel to `supported_os`
    #[serde(rename = "OSVersions", default)]
    pub os_versions: Vec<u32>,
}

/// Hardware model identifier → supported OS list, as published by the support feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SupportMatrix {
    #[serde(rename = "Models", default)]
    pub models: HashMap<String, MacModel>,
}

impl SupportMatrix {
    pub fn new(models: HashMap<String, MacModel>) -> Self {
        Self { models }
    }

    pub fn model(&self, hardware_model: &str) -> Option<&MacModel> {
        self.models.get(hardware_model)
    }

    pub fn marketing_name(&self, hardware_model: &str) -> Option<&str> {
        self.model(hardware_model)
            .map(|m| m.marketing_name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// The newest OS a device can run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestCompatibleOs {
    Supported {
        /// First `SupportedOS` entry, rendered verbatim in the report
        name: String,
        /// Numeric major version used for filtering
        version: Option<u32>,
    },
    Unsupported,
}

impl LatestCompatibleOs {
    pub fn version(&self) -> Option<u32> {
        match self {
            LatestCompatibleOs::Supported { version, .. } => *version,
            LatestCompatibleOs::Unsupported => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, LatestCompatibleOs::Supported { .. })
    }
}

impl fmt::Display for LatestCompatibleOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatestCompatibleOs::Supported { name, .. } => write!(f, "{}", name),
            LatestCompatibleOs::Unsupported => write!(f, "{}", UNSUPPORTED),
        }
    }
}

/// Looks up the latest OS for `hardware_model`. Never fails.
///
/// Only an exact key match counts; a model missing from the matrix, or listed
/// with no supported OS, is [`LatestCompatibleOs::Unsupported`].
pub fn latest_compatible_os(matrix: &SupportMatrix, hardware_model: &str) -> LatestCompatibleOs {
    let Some(model) = matrix.model(hardware_model) else {
        return LatestCompatibleOs::Unsupported;
    };

    let Some(name) = model.supported_os.first() else {
        return LatestCompatibleOs::Unsupported;
    };

    let version = model
        .os_versions
        .first()
        .copied()
        .or_else(|| leading_number(name));

    LatestCompatibleOs::Supported {
        name: name.clone(),
        version,
    }
}

/// First run of ASCII digits in `text`, e.g. `"Sequoia 15"` → 15
fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> SupportMatrix {
        let json = r#"{
            "UpdateHash": "abc",
            "Models": {
                "Mac14,2": {
                    "MarketingName": "MacBook Air (M2, 2022)",
                    "SupportedOS": ["Sequoia 15", "Sonoma 14"],
                    "OSVersions": [15, 14]
                },
                "MacBookPro11,4": {
                    "MarketingName": "MacBook Pro (Retina, 15-inch, Mid 2015)",
                    "SupportedOS": ["15", "14"],
                    "OSVersions": []
                },
                "Macmini6,1": {
                    "MarketingName": "Mac mini (Late 2012)",
                    "SupportedOS": [],
                    "OSVersions": []
                }
            }
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_supported_os_is_latest() {
        let latest = latest_compatible_os(&matrix(), "Mac14,2");
        assert_eq!(
            latest,
            LatestCompatibleOs::Supported {
                name: "Sequoia 15".to_string(),
                version: Some(15),
            }
        );
        assert_eq!(latest.to_string(), "Sequoia 15");
    }

    #[test]
    fn test_version_parsed_from_name_without_os_versions() {
        let latest = latest_compatible_os(&matrix(), "MacBookPro11,4");
        assert_eq!(latest.to_string(), "15");
        assert_eq!(latest.version(), Some(15));
    }

    #[test]
    fn test_absent_model_is_unsupported() {
        let latest = latest_compatible_os(&matrix(), "iMac8,1");
        assert_eq!(latest, LatestCompatibleOs::Unsupported);
        assert_eq!(latest.to_string(), "Unsupported");
        assert_eq!(latest.version(), None);
    }

    #[test]
    fn test_match_is_exact() {
        assert!(!latest_compatible_os(&matrix(), "mac14,2").is_supported());
        assert!(!latest_compatible_os(&matrix(), "N/A").is_supported());
    }

    #[test]
    fn test_model_without_supported_os_is_unsupported() {
        assert_eq!(
            latest_compatible_os(&matrix(), "Macmini6,1"),
            LatestCompatibleOs::Unsupported
        );
    }

    #[test]
    fn test_marketing_name() {
        let matrix = matrix();
        assert_eq!(
            matrix.marketing_name("Mac14,2"),
            Some("MacBook Air (M2, 2022)")
        );
        assert_eq!(matrix.marketing_name("Unknown1,1"), None);
        assert_eq!(matrix.len(), 3);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("Sonoma 14"), Some(14));
        assert_eq!(leading_number("13"), Some(13));
        assert_eq!(leading_number("Tahoe"), None);
    }
}
