//! Details blob rendering
//!
//! Objects become `key: value` lines, nested containers are indented by two
//! spaces per level, and list items are prefixed with `- `.

use serde_json::Value;

use crate::models::Details;

/// Render a details blob for reading
pub fn pretty_details(details: &Details) -> String {
    match details {
        Details::Text(text) => text.clone(),
        Details::Json(value) => {
            let mut output = String::new();
            render(value, 0, &mut output);
            output
        }
    }
}

fn render(value: &Value, depth: usize, output: &mut String) {
    let spacing = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if child.is_object() || child.is_array() {
                    output.push_str(&format!("{}{}:\n", spacing, key));
                    render(child, depth + 1, output);
                } else {
                    output.push_str(&format!("{}{}: {}\n", spacing, key, scalar(child)));
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                let mut nested = String::new();
                render(item, depth + 1, &mut nested);
                output.push_str(&format!("{}- {}\n", spacing, nested.trim()));
            }
        }
        other => output.push_str(&format!("{}{}\n", spacing, scalar(other))),
    }
}

/// Scalars without JSON quoting
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
