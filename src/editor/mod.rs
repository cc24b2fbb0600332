//! Record editor for acctree
//!
//! The editor owns the in-memory document and the session state the
//! presentation layer works against: which account and service are selected,
//! whether account fields are unlocked for editing, and whether there are
//! unsaved changes. Every operation runs to completion synchronously; nothing
//! is written to disk until [`RecordEditor::save_all`].
//!
//! Operations are split by entity:
//!
//! - `account`: create, edit session, update (rename), delete
//! - `service`: create, update (full replace), delete
//! - `search`: stateless name filtering for suggestion lists

pub mod account;
pub mod search;
pub mod service;

pub use account::UpdateOutcome;
pub use search::{matching_services, suggestions};

use std::path::Path;

use log::warn;
use serde_json::Value;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{AcctreeError, AcctreeResult};
use crate::models::{Account, AccountKey, AccountUpdate, Document, Service};
use crate::storage::DocumentStore;

/// The user's answer to a confirmation prompt
///
/// Destructive operations take one so the caller cannot skip asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

impl Decision {
    /// Map a yes/no answer
    pub fn from_bool(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Session state plus the document it edits
pub struct RecordEditor {
    store: DocumentStore,
    document: Document,
    selected_account: Option<AccountKey>,
    selected_service: Option<usize>,
    /// Account-level fields are read-only while locked
    edit_lock: bool,
    /// Values captured when the edit session began
    edit_snapshot: Option<AccountUpdate>,
    dirty: bool,
    /// Set when the file exists but could not be read; saving is refused
    load_error: Option<String>,
    audit: Option<AuditLogger>,
}

impl RecordEditor {
    /// Open the store's file, falling back to an empty document
    ///
    /// The second value is the load problem to show the user, if any.
    pub fn open(store: DocumentStore) -> (Self, Option<AcctreeError>) {
        let loaded = store.load_or_default();
        let mut editor = Self::with_document(store, loaded.document);
        editor.load_error = blocking_load_error(loaded.warning.as_ref());
        (editor, loaded.warning)
    }

    /// Create an editor over an already loaded document
    pub fn with_document(store: DocumentStore, document: Document) -> Self {
        Self {
            store,
            document,
            selected_account: None,
            selected_service: None,
            edit_lock: true,
            edit_snapshot: None,
            dirty: false,
            load_error: None,
            audit: None,
        }
    }

    /// Record mutations to an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    // ---- read model ----

    /// The whole document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Account keys for list rendering: emails, then OTHERS
    pub fn account_keys(&self) -> Vec<AccountKey> {
        self.document.keys()
    }

    /// Account-shaped view of an account or the OTHERS bucket
    pub fn account(&self, key: &AccountKey) -> Option<Account> {
        self.document.account_view(key)
    }

    /// Services under an account or the OTHERS bucket
    pub fn services(&self, key: &AccountKey) -> Option<&[Service]> {
        self.document.services(key)
    }

    pub fn selected_account(&self) -> Option<&AccountKey> {
        self.selected_account.as_ref()
    }

    pub fn selected_service_index(&self) -> Option<usize> {
        self.selected_service
    }

    /// The selected service record
    pub fn selected_service(&self) -> Option<&Service> {
        let key = self.selected_account.as_ref()?;
        let index = self.selected_service?;
        self.document.services(key)?.get(index)
    }

    /// Whether there are edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether account-level fields are unlocked
    pub fn is_editing(&self) -> bool {
        !self.edit_lock
    }

    // ---- selection ----

    /// Select an account or the OTHERS bucket
    ///
    /// Clears the service selection and ends any edit session.
    pub fn select_account(&mut self, key: AccountKey) -> AcctreeResult<()> {
        if !self.document.contains(&key) {
            return Err(AcctreeError::account_not_found(key.as_str()));
        }

        self.selected_account = Some(key);
        self.selected_service = None;
        self.end_edit();
        Ok(())
    }

    /// Select a service of the selected account by position
    pub fn select_service(&mut self, index: usize) -> AcctreeResult<()> {
        let key = self.require_account()?;
        let count = self.document.services(&key).map_or(0, <[Service]>::len);
        if index >= count {
            return Err(AcctreeError::service_not_found(format!("{}#{}", key, index)));
        }

        self.selected_service = Some(index);
        Ok(())
    }

    /// Drop both selections and end any edit session
    /// Drop the service selection, keeping the account
    pub fn clear_service_selection(&mut self) {
        self.selected_service = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected_account = None;
        self.selected_service = None;
        self.end_edit();
    }

    // ---- persistence ----

    /// Write the document to disk
    ///
    /// Returns the notice to show the user unless `silent` is set. On failure
    /// the in-memory document is left as it was and stays dirty. A file that
    /// exists but failed to load is never overwritten.
    pub fn save_all(&mut self, silent: bool) -> AcctreeResult<Option<String>> {
        if let Some(reason) = &self.load_error {
            return Err(AcctreeError::Validation(format!(
                "Refusing to overwrite {}: it could not be loaded ({}). Fix or move the file, then reload.",
                self.store.path().display(),
                reason
            )));
        }
        self.store.save(&self.document)?;
        self.dirty = false;

        if silent {
            Ok(None)
        } else {
            Ok(Some(format!("Data saved to {}.", self.store.path().display())))
        }
    }

    /// Replace the document with the file's contents, discarding edits
    pub fn reload(&mut self) -> Option<AcctreeError> {
        let loaded = self.store.load_or_default();
        self.document = loaded.document;
        self.load_error = blocking_load_error(loaded.warning.as_ref());
        self.dirty = false;
        self.clear_selection();
        loaded.warning
    }

    // ---- internals shared by the operation modules ----

    /// The selected account key, checked against the document
    fn require_account(&self) -> AcctreeResult<AccountKey> {
        let key = self
            .selected_account
            .clone()
            .ok_or_else(|| AcctreeError::Validation("Select an account first.".into()))?;

        if !self.document.contains(&key) {
            return Err(AcctreeError::account_not_found(key.as_str()));
        }

        Ok(key)
    }

    fn end_edit(&mut self) {
        self.edit_lock = true;
        self.edit_snapshot = None;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Append to the audit log; failures are logged, never surfaced
    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(&entry) {
                warn!("Failed to write audit entry: {}", err);
            }
        }
    }
}

/// The load problem that makes saving unsafe; a missing file is fine
fn blocking_load_error(warning: Option<&AcctreeError>) -> Option<String> {
    warning
        .filter(|w| !w.is_not_found())
        .map(ToString::to_string)
}

/// JSON form of an entity for diffing; falls back to null
fn to_json<T: serde::Serialize>(entity: &T) -> Value {
    serde_json::to_value(entity).unwrap_or(Value::Null)
}
