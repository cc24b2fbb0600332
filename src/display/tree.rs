//! Document tree rendering
//!
//! Each account becomes a root node holding its fields and a `services`
//! branch; each service is labelled by name with its fields beneath.
//! Object values expand into child nodes and lists into `[i]` nodes.

use serde_json::Value;

use super::{mask, MASK};
use crate::audit::is_secret_field;
use crate::models::{AccountKey, Document, Service};

struct Node {
    label: String,
    value: Option<String>,
    children: Vec<Node>,
}

impl Node {
    fn branch(label: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            value: None,
            children,
        }
    }

    fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Build a node from an arbitrary JSON value
    fn from_value(label: &str, value: &Value, reveal: bool) -> Self {
        match value {
            Value::Object(map) => Self::branch(
                label,
                map.iter()
                    .map(|(key, child)| Self::from_value(key, child, reveal))
                    .collect(),
            ),
            Value::Array(items) => Self::branch(
                label,
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| Self::from_value(&format!("[{}]", i), item, reveal))
                    .collect(),
            ),
            Value::String(s) if is_secret_field(label) => Self::leaf(label, mask(s, reveal)),
            Value::String(s) => Self::leaf(label, s.as_str()),
            _ if is_secret_field(label) && !reveal => Self::leaf(label, MASK),
            other => Self::leaf(label, other.to_string()),
        }
    }
}

fn service_node(service: &Service, reveal: bool) -> Node {
    let fields = serde_json::to_value(service)
        .ok()
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default();

    let children = fields
        .iter()
        .filter(|(key, _)| key.as_str() != "name")
        .map(|(key, value)| Node::from_value(key, value, reveal))
        .collect();

    Node::branch(service.display_name(), children)
}

fn account_node(document: &Document, key: &AccountKey, reveal: bool) -> Option<Node> {
    let account = document.account_view(key)?;
    let fields = serde_json::to_value(&account)
        .ok()
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default();

    let mut children: Vec<Node> = fields
        .iter()
        .filter(|(field, _)| field.as_str() != "services")
        .map(|(field, value)| Node::from_value(field, value, reveal))
        .collect();

    children.push(Node::branch(
        "services",
        account
            .services
            .iter()
            .map(|service| service_node(service, reveal))
            .collect(),
    ));

    Some(Node::branch(key.to_string(), children))
}

fn render(node: &Node, prefix: &str, is_last: bool, is_root: bool, output: &mut String) {
    let connector = match (is_root, is_last) {
        (true, _) => "",
        (false, true) => "└── ",
        (false, false) => "├── ",
    };

    match &node.value {
        Some(value) if value.is_empty() => {
            output.push_str(&format!("{}{}{}:\n", prefix, connector, node.label))
        }
        Some(value) => output.push_str(&format!("{}{}{}: {}\n", prefix, connector, node.label, value)),
        None => output.push_str(&format!("{}{}{}\n", prefix, connector, node.label)),
    }

    let child_prefix = match (is_root, is_last) {
        (true, _) => prefix.to_string(),
        (false, true) => format!("{}    ", prefix),
        (false, false) => format!("{}│   ", prefix),
    };

    for (i, child) in node.children.iter().enumerate() {
        render(child, &child_prefix, i == node.children.len() - 1, false, output);
    }
}

/// Render the whole document as a tree, accounts first and OTHERS last
pub fn format_tree(document: &Document, reveal: bool) -> String {
    let mut output = String::new();
    for key in document.keys() {
        if let Some(node) = account_node(document, &key, reveal) {
            render(&node, "", true, true, &mut output);
        }
    }
    output
}
