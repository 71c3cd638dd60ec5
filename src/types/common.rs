//! Miscellaneous common types used throughout the request document.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Represents any JSON value. Used for serializing/deserializing arbitrary JSON data.
pub type AnyJson = serde_json::Value;

/// Represents the Google Pay API major version 2, written as `"apiVersion": 2`.
///
/// ```
/// use serde::{Serialize, Deserialize};
/// use google_pay_request::types::ApiVersion2;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Example {
///     api_version: ApiVersion2,
/// }
///
/// let example: Example = serde_json::from_value(serde_json::json!({
///     "apiVersion": 2,
/// })).unwrap();
///
/// assert_eq!(example.api_version, ApiVersion2);
///
/// let json = serde_json::to_value(&example).unwrap();
/// assert_eq!(json.get("apiVersion").unwrap(), &serde_json::json!(2));
///
/// assert!(serde_json::from_value::<Example>(serde_json::json!({
///     "apiVersion": 1,
/// })).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ApiVersion2;

/// Represents the Google Pay API minor version 0, written as `"apiVersionMinor": 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ApiVersionMinor0;

impl Serialize for ApiVersion2 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(2)
    }
}

impl<'de> Deserialize<'de> for ApiVersion2 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = u8::deserialize(deserializer)?;
        match v {
            2 => Ok(ApiVersion2),
            _ => Err(serde::de::Error::custom(format!(
                "Unsupported API version {}; expected 2",
                v
            ))),
        }
    }
}

impl Display for ApiVersion2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "2")
    }
}

impl Serialize for ApiVersionMinor0 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(0)
    }
}

impl<'de> Deserialize<'de> for ApiVersionMinor0 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = u8::deserialize(deserializer)?;
        match v {
            0 => Ok(ApiVersionMinor0),
            _ => Err(serde::de::Error::custom(format!(
                "Unsupported API minor version {}; expected 0",
                v
            ))),
        }
    }
}

impl Display for ApiVersionMinor0 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0")
    }
}
