//! Service name filtering
//!
//! Matching is a case-insensitive substring test on the service name. The
//! query is used as typed; only an empty query matches everything.

use crate::models::Service;

/// Services whose name contains `query`, paired with their index
pub fn matching_services<'a>(services: &'a [Service], query: &str) -> Vec<(usize, &'a Service)> {
    let needle = query.to_lowercase();
    services
        .iter()
        .enumerate()
        .filter(|(_, service)| needle.is_empty() || service.name.to_lowercase().contains(&needle))
        .collect()
}

/// Names of the matching services, for suggestion lists
pub fn suggestions<'a>(services: &'a [Service], query: &str) -> Vec<&'a str> {
    matching_services(services, query)
        .into_iter()
        .map(|(_, service)| service.name.as_str())
        .collect()
}
