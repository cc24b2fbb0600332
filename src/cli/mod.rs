//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the record editor. Every mutating command saves
//! silently once the edit has been applied.

pub mod account;
pub mod audit;
pub mod prompt;
pub mod service;

pub use account::{handle_account_command, AccountCommands};
pub use audit::handle_audit_command;
pub use service::{handle_search_command, handle_service_command, ServiceCommands};

use crate::editor::RecordEditor;
use crate::error::AcctreeResult;
use crate::models::AccountKey;

/// Parse a key as typed on the command line and select it
fn select_account(editor: &mut RecordEditor, key: &str) -> AcctreeResult<AccountKey> {
    let key = AccountKey::parse(key);
    editor.select_account(key.clone())?;
    Ok(key)
}
