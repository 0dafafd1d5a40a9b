//! Status Payload
//!
//! The JSON document served by the public server status API. Only the fields
//! the renderer reads are modeled; everything else is ignored.
//!
//! Scalar fields are read leniently: a value of the wrong type degrades that
//! one field instead of failing the whole payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server status as reported by the status API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Any truthy value counts as online
    #[serde(default, deserialize_with = "truthy")]
    pub online: bool,
    #[serde(default)]
    pub players: Option<Players>,
    #[serde(default)]
    pub motd: Option<Motd>,
    /// Numbers and booleans are kept as their JSON text
    #[serde(default, deserialize_with = "text")]
    pub version: Option<String>,
}

/// Player counts and, when the server exposes it, the roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Players {
    #[serde(default, deserialize_with = "count")]
    pub online: Option<u64>,
    #[serde(default, deserialize_with = "count")]
    pub max: Option<u64>,
    /// Full roster; entries are names or objects with `name`/`id`
    #[serde(default)]
    pub list: Option<Value>,
    /// Partial roster from the server list ping
    #[serde(default)]
    pub sample: Option<Value>,
}

/// MOTD in the three forms the API provides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Motd {
    /// Lines with formatting codes
    #[serde(default, deserialize_with = "lines")]
    pub raw: Option<Vec<String>>,
    /// Lines with formatting codes stripped
    #[serde(default, deserialize_with = "lines")]
    pub clean: Option<Vec<String>>,
    /// Lines already rendered to HTML by the API
    #[serde(default, deserialize_with = "lines")]
    pub html: Option<Vec<String>>,
}

impl ServerStatus {
    /// Parse a status payload from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Accept either a single string or a list of strings
fn lines<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<Lines>::deserialize(deserializer)?.map(|lines| match lines {
        Lines::One(line) => line.split('\n').map(str::to_string).collect(),
        Lines::Many(lines) => lines,
    }))
}

/// JavaScript truthiness of a JSON value
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// A non-negative count from an integer, a float (truncated) or a numeric
/// string; anything else is treated as absent
fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.as_u64().or_else(|| {
        number
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as u64)
    }))
}

/// A string, or the JSON text of a number or boolean
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
        _ => None,
    })
}
