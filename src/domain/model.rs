use serde::{Deserialize, Serialize};
use std::fmt;

/// The caller's public IP address in IPv4 or IPv6 textual form, exactly as
/// the IP-echo service returned it. No local validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(pub String);

impl From<&str> for IpAddress {
    fn from(value: &str) -> Self {
        IpAddress(value.to_string())
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A latitude or longitude kept in whatever form the geolocation service
/// sent it (string or number), so it can be embedded in the flyover query
/// without coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(pub serde_json::Value);

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Coordinate(serde_json::Value::String(value.to_string()))
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Coordinate(serde_json::Value::from(value))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A string value renders without the JSON quotes
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

/// One predicted ISS flyover: rise time in Unix seconds and visibility
/// duration in seconds. Ordering within a prediction is server-determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    pub risetime: i64,
    pub duration: i64,
}
