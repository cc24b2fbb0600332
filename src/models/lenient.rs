//! Forgiving field deserializers
//!
//! Hand-edited data files carry `null` where a string belongs, numbers in
//! text fields and a bare string where a phone list belongs. These helpers
//! read such values instead of rejecting the whole document. Arrays and
//! objects in a text field are still an error.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string(value: Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(format!("expected a string, found {}", other)),
    }
}

fn value_to_list(value: Value) -> Result<Vec<String>, String> {
    match value {
        Value::Array(items) => items.into_iter().map(scalar_to_string).collect(),
        scalar => {
            let s = scalar_to_string(scalar)?;
            Ok(if s.is_empty() { Vec::new() } else { vec![s] })
        }
    }
}

/// A text field; `null` reads as `""`, numbers and booleans as their text
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?).map_err(de::Error::custom)
}

/// An optional text field; `null` reads as absent
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => scalar_to_string(value)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// A list of strings; a single string reads as a one-element list
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    value_to_list(Value::deserialize(deserializer)?).map_err(de::Error::custom)
}

/// An optional list of strings; `null` reads as absent
pub fn opt_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => value_to_list(value).map(Some).map_err(de::Error::custom),
    }
}

/// Any defaultable value; `null` reads as the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
