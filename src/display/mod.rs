//! Display formatting for terminal output
//!
//! Plain-text renderings of accounts, services, the document tree and
//! details blobs. Secrets are masked unless the caller asks to reveal them.

pub mod account;
pub mod details;
pub mod service;
pub mod tree;

pub use account::{format_account_details, format_account_list};
pub use details::pretty_details;
pub use service::{format_service_details, format_service_list};
pub use tree::format_tree;

/// Shown in place of a non-empty secret
pub const MASK: &str = "********";

/// Mask a secret unless `reveal` is set; empty secrets stay empty
pub fn mask(secret: &str, reveal: bool) -> &str {
    if reveal || secret.is_empty() {
        secret
    } else {
        MASK
    }
}
