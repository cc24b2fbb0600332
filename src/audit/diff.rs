//! Diff generation for audit logging
//!
//! Generates human-readable summaries of what changed between two states of
//! an account or service. Secret fields are never written out.

use serde_json::Value;

/// Fields whose values must not appear in the audit log
const SECRET_FIELDS: &[&str] = &["password", "PIN"];

/// Placeholder written in place of a secret value
const REDACTED: &str = "<redacted>";

/// Whether a field holds a secret
pub fn is_secret_field(key: &str) -> bool {
    SECRET_FIELDS.contains(&key)
}

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are listed. Secret fields are reported as
/// changed without showing either value.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                let shown_before = shown_value(key, before_val);
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => {
                        changes.push(format!(
                            "{}: {} -> {}",
                            key,
                            shown_before,
                            shown_value(key, after_val)
                        ));
                    }
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, shown_before)),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        key,
                        shown_value(key, after_val)
                    ));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ => {
            if before != after {
                Some(format!(
                    "{} -> {}",
                    format_value(before),
                    format_value(after)
                ))
            } else {
                None
            }
        }
    }
}

fn shown_value(key: &str, value: &Value) -> String {
    if is_secret_field(key) {
        REDACTED.to_string()
    } else {
        format_value(value)
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field_change() {
        let before = json!({"note": "old", "url": "x"});
        let after = json!({"note": "new", "url": "x"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "note: \"old\" -> \"new\"");
    }

    #[test]
    fn test_secret_fields_redacted() {
        let before = json!({"password": "hunter2", "PIN": "1111"});
        let after = json!({"password": "correct horse", "PIN": "2222"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("password: <redacted> -> <redacted>"));
        assert!(diff.contains("PIN: <redacted> -> <redacted>"));
        assert!(!diff.contains("hunter2"));
        assert!(!diff.contains("2222"));
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"old": "value"});
        let after = json!({"password": "s3cret"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"value\" -> (removed)"));
        assert!(diff.contains("password: (added) -> <redacted>"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Mail", "phone": ["1"]});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_array_change_summary() {
        let before = json!({"phone": ["1"]});
        let after = json!({"phone": ["1", "2", "3"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "phone: [1 items] -> [3 items]");
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"note": "é".repeat(100)});
        let after = json!({"note": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
