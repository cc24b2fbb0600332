//! Audit logging system for acctree
//!
//! Records every create, update and delete made through the record editor in
//! an append-only JSONL file.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log entry with timestamp, operation, entity and an
//!   optional diff summary.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: human-readable diff between two entity states, with
//!   password and PIN values redacted.
//!
//! Entries never hold full entity snapshots, so stored secrets do not leak
//! into the log.

mod diff;
mod entry;
mod logger;

pub use diff::{generate_diff, is_secret_field};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
