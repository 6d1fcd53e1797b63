use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Value of a single device fact as reported by the fleet API.
///
/// The API sends untyped JSON values; this sum type keeps every shape it can
/// produce so extraction never has to fail.
#[derive(Debug, Clone, PartialEq)]
pub enum FactValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    /// The agent could not collect the fact; carries the reported message.
    Error(String),
    /// Arrays and objects, kept verbatim.
    Structured(serde_json::Value),
}

impl FactValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FactValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FactValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FactValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FactValue::Error(_))
    }
}

/// A named device attribute: its value, the type the API declared for it,
/// and the collection error message if there was one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDeviceFact")]
pub struct DeviceFact {
    pub value: FactValue,
    pub declared_type: String,
    pub error_msg: Option<String>,
}

impl DeviceFact {
    pub fn new(value: FactValue, declared_type: impl Into<String>) -> Self {
        Self {
            value,
            declared_type: declared_type.into(),
            error_msg: None,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(FactValue::String(value.into()), "string")
    }

    fn null() -> Self {
        Self::new(FactValue::Null, "")
    }
}

#[derive(Debug, Deserialize)]
struct RawDeviceFact {
    #[serde(default)]
    value: serde_json::Value,
    #[serde(default, rename = "type")]
    declared_type: Option<String>,
    #[serde(default)]
    error_msg: Option<String>,
}

impl From<RawDeviceFact> for DeviceFact {
    fn from(raw: RawDeviceFact) -> Self {
        let error_msg = raw.error_msg.filter(|msg| !msg.is_empty());

        // A present value wins over an accompanying error message.
        let value = match raw.value {
            serde_json::Value::Null => match &error_msg {
                Some(msg) => FactValue::Error(msg.clone()),
                None => FactValue::Null,
            },
            serde_json::Value::String(s) => FactValue::String(s),
            serde_json::Value::Bool(b) => FactValue::Boolean(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => FactValue::Number(f),
                None => FactValue::Structured(serde_json::Value::Number(n)),
            },
            other => FactValue::Structured(other),
        };

        Self {
            value,
            declared_type: raw.declared_type.unwrap_or_default(),
            error_msg,
        }
    }
}

/// Deserializes the `facts` map, tolerating facts sent as JSON `null`.
pub(crate) fn deserialize_facts<'de, D>(
    deserializer: D,
) -> std::result::Result<HashMap<String, DeviceFact>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<DeviceFact>>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, fact)| (name, fact.unwrap_or_else(DeviceFact::null)))
        .collect())
}
