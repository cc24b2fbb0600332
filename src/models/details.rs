//! Details blob
//!
//! Free-form payload attached to a service. It holds either parsed JSON or
//! the raw text the user typed when that text was not valid JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A service's free-form details
///
/// In the document file a JSON string loads as `Text`; any other JSON value
/// loads as `Json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Details {
    /// Raw text, kept verbatim
    Text(String),
    /// Parsed JSON (object, array, number, ...)
    Json(Value),
}

impl Details {
    /// Build details from user input
    ///
    /// Input is trimmed. Empty input stores an empty string, valid JSON is
    /// stored parsed, and anything else is stored as the literal text.
    pub fn parse_input(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Text(String::new());
        }

        match serde_json::from_str::<Value>(input) {
            Ok(Value::String(s)) => Self::Text(s),
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(input.to_string()),
        }
    }

    /// Whether there is nothing worth showing
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Json(Value::Object(map)) => map.is_empty(),
            Self::Json(Value::Array(items)) => items.is_empty(),
            Self::Json(Value::Null) => true,
            Self::Json(_) => false,
        }
    }

    /// Text suitable for pre-filling an edit field
    ///
    /// Parsed JSON is rendered as compact JSON so it parses back to the same
    /// value when the form is submitted unchanged.
    pub fn to_input(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Json(value) => value.to_string(),
        }
    }
}

impl Default for Details {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let details = Details::parse_input("{\"a\":1}");
        assert_eq!(details, Details::Json(json!({"a": 1})));
    }

    #[test]
    fn test_parse_invalid_keeps_text() {
        let details = Details::parse_input("not json");
        assert_eq!(details, Details::Text("not json".into()));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Details::parse_input(""), Details::Text(String::new()));
        assert_eq!(Details::parse_input("   \n"), Details::Text(String::new()));
    }

    #[test]
    fn test_quoted_string_is_text() {
        let details = Details::parse_input("\"hello\"");
        assert_eq!(details, Details::Text("hello".into()));
    }

    #[test]
    fn test_serialize_shapes() {
        let text = serde_json::to_string(&Details::Text("raw".into())).unwrap();
        assert_eq!(text, "\"raw\"");

        let object = serde_json::to_string(&Details::Json(json!({"k": "v"}))).unwrap();
        assert_eq!(object, "{\"k\":\"v\"}");
    }

    #[test]
    fn test_deserialize_shapes() {
        let text: Details = serde_json::from_str("\"raw\"").unwrap();
        assert_eq!(text, Details::Text("raw".into()));

        let list: Details = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(list, Details::Json(json!([1, 2])));
    }

    #[test]
    fn test_to_input_parses_back() {
        let details = Details::Json(json!({"source": "Login", "n": [1, 2]}));
        assert_eq!(Details::parse_input(&details.to_input()), details);
    }

    #[test]
    fn test_is_empty() {
        assert!(Details::default().is_empty());
        assert!(Details::Json(json!({})).is_empty());
        assert!(!Details::Json(json!(0)).is_empty());
        assert!(!Details::Text("x".into()).is_empty());
    }
}
