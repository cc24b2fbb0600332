//! Account operations
//!
//! Creation, the edit session that gates account-level fields, rename-aware
//! updates, and deletion. The OTHERS bucket can be edited but never renamed,
//! created or deleted.

use log::debug;

use crate::audit::{generate_diff, AuditEntry, EntityType};
use crate::error::{AcctreeError, AcctreeResult};
use crate::models::{Account, AccountKey, AccountUpdate, OTHERS_KEY};

use super::{to_json, Decision, RecordEditor};

/// Result of submitting an account edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Submitted values matched the session snapshot; nothing was written
    Unchanged,
    Updated,
}

impl RecordEditor {
    /// Create an empty account and select it
    ///
    /// Does not persist; call [`RecordEditor::save_all`] afterwards.
    pub fn create_account(&mut self, email: &str) -> AcctreeResult<AccountKey> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AcctreeError::Validation("Email is required.".into()));
        }
        if email == OTHERS_KEY {
            return Err(AcctreeError::Validation(format!(
                "\"{}\" is reserved and cannot be used as an account email.",
                OTHERS_KEY
            )));
        }
        if self.document.accounts.contains_key(email) {
            return Err(AcctreeError::Validation(
                "Account with this email already exists.".into(),
            ));
        }

        self.document
            .accounts
            .insert(email.to_string(), Account::new());
        self.mark_dirty();
        debug!("Created account {}", email);
        self.record(AuditEntry::create(EntityType::Account, email, None));

        let key = AccountKey::Account(email.to_string());
        self.select_account(key.clone())?;
        Ok(key)
    }

    /// Unlock account-level fields of the selected account
    ///
    /// Returns the current values, which are also kept as the snapshot the
    /// submitted edit is compared against.
    pub fn begin_edit(&mut self) -> AcctreeResult<AccountUpdate> {
        let key = self.require_account()?;
        let account = self
            .document
            .account_view(&key)
            .ok_or_else(|| AcctreeError::account_not_found(key.as_str()))?;

        let snapshot = AccountUpdate::from_account(&key, &account);
        self.edit_snapshot = Some(snapshot.clone());
        self.edit_lock = false;
        Ok(snapshot)
    }

    /// Leave the edit session without writing anything
    pub fn cancel_edit(&mut self) {
        self.end_edit();
    }

    /// Apply an edit to the selected account
    ///
    /// Requires an open edit session. A changed email moves the account to
    /// the new key, which must be free. For OTHERS the email is ignored.
    pub fn update_account(&mut self, update: AccountUpdate) -> AcctreeResult<UpdateOutcome> {
        let key = self.require_account()?;
        if self.edit_lock {
            return Err(AcctreeError::Validation(
                "Account fields are locked. Start an edit first.".into(),
            ));
        }

        let email = match &key {
            AccountKey::Others => OTHERS_KEY.to_string(),
            AccountKey::Account(_) => update.email.trim().to_string(),
        };
        let update = AccountUpdate { email, ..update };

        if self.edit_snapshot.as_ref() == Some(&update) {
            self.end_edit();
            return Ok(UpdateOutcome::Unchanged);
        }

        match &key {
            AccountKey::Others => self.update_others(update),
            AccountKey::Account(current) => self.update_keyed(current, update)?,
        }

        self.end_edit();
        self.mark_dirty();
        Ok(UpdateOutcome::Updated)
    }

    fn update_others(&mut self, update: AccountUpdate) {
        let before = to_json(&self.document.others);

        let others = &mut self.document.others;
        others.password = Some(update.password);
        others.date_created = Some(update.date_created);
        others.phone = Some(update.phone);

        let diff = generate_diff(&before, &to_json(&self.document.others));
        debug!("Updated {}", OTHERS_KEY);
        self.record(AuditEntry::update(EntityType::Account, OTHERS_KEY, None, diff));
    }

    fn update_keyed(&mut self, current: &str, update: AccountUpdate) -> AcctreeResult<()> {
        let new_email = update.email;
        if new_email.is_empty() {
            return Err(AcctreeError::Validation("Email is required.".into()));
        }
        if new_email == OTHERS_KEY {
            return Err(AcctreeError::Validation(format!(
                "\"{}\" is reserved and cannot be used as an account email.",
                OTHERS_KEY
            )));
        }
        let renamed = new_email != current;
        if renamed && self.document.accounts.contains_key(&new_email) {
            return Err(AcctreeError::Validation(
                "Account with this email already exists.".into(),
            ));
        }

        let mut account = self
            .document
            .accounts
            .remove(current)
            .ok_or_else(|| AcctreeError::account_not_found(current))?;
        let mut before = to_json(&account);
        before["email"] = current.into();

        account.password = update.password;
        account.date_created = update.date_created;
        account.phone = update.phone;

        let mut after = to_json(&account);
        after["email"] = new_email.as_str().into();

        self.document.accounts.insert(new_email.clone(), account);
        debug!("Updated account {} (now {})", current, new_email);
        self.record(AuditEntry::update(
            EntityType::Account,
            current,
            renamed.then(|| new_email.clone()),
            generate_diff(&before, &after),
        ));

        self.selected_account = Some(AccountKey::Account(new_email));
        Ok(())
    }

    /// Delete the selected account
    ///
    /// OTHERS cannot be deleted. A declined decision leaves everything as is
    /// and returns `None`.
    pub fn delete_account(&mut self, decision: Decision) -> AcctreeResult<Option<Account>> {
        let email = match self.require_account()? {
            AccountKey::Others => {
                return Err(AcctreeError::Validation(format!(
                    "{} is reserved and cannot be deleted.",
                    OTHERS_KEY
                )))
            }
            AccountKey::Account(email) => email,
        };

        if decision == Decision::Declined {
            return Ok(None);
        }

        let removed = self
            .document
            .accounts
            .remove(&email)
            .ok_or_else(|| AcctreeError::account_not_found(&email))?;

        self.clear_selection();
        self.mark_dirty();
        debug!("Deleted account {}", email);
        self.record(AuditEntry::delete(EntityType::Account, email, None));
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, ServiceForm};
    use crate::storage::DocumentStore;
    use tempfile::TempDir;

    fn create_test_editor() -> (TempDir, RecordEditor) {
        let temp_dir = TempDir::new().unwrap();
        let store = DocumentStore::new(temp_dir.path().join("data.json"));
        let editor = RecordEditor::with_document(store, Document::empty());
        (temp_dir, editor)
    }

    fn key(email: &str) -> AccountKey {
        AccountKey::Account(email.to_string())
    }

    fn edit(editor: &mut RecordEditor, change: impl FnOnce(&mut AccountUpdate)) -> AcctreeResult<UpdateOutcome> {
        let mut update = editor.begin_edit()?;
        change(&mut update);
        editor.update_account(update)
    }

    #[test]
    fn test_create_account() {
        let (_temp_dir, mut editor) = create_test_editor();

        let created = editor.create_account("a@b.com").unwrap();
        assert_eq!(created, key("a@b.com"));
        assert_eq!(editor.selected_account(), Some(&created));

        let account = editor.account(&created).unwrap();
        assert!(account.password.is_empty());
        assert!(account.phone.is_empty());
        assert!(account.services.is_empty());
        assert!(!account.date_created.is_empty());
    }

    #[test]
    fn test_create_rejects_reserved_and_empty() {
        let (_temp_dir, mut editor) = create_test_editor();

        assert!(editor.create_account("OTHERS").unwrap_err().is_validation());
        assert!(editor.create_account("").unwrap_err().is_validation());
        assert!(editor.create_account("   ").unwrap_err().is_validation());
        assert!(editor.document().accounts.is_empty());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_create_rejects_duplicate() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();
        let before = editor.document().clone();

        assert!(editor.create_account("a@b.com").unwrap_err().is_validation());
        assert_eq!(editor.document(), &before);
    }

    #[test]
    fn test_update_requires_edit_session() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();

        let update = AccountUpdate {
            email: "a@b.com".into(),
            password: "new".into(),
            ..AccountUpdate::default()
        };
        assert!(editor.update_account(update).unwrap_err().is_validation());
        assert!(editor.account(&key("a@b.com")).unwrap().password.is_empty());
    }

    #[test]
    fn test_update_fields() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();

        let outcome = edit(&mut editor, |u| {
            u.password = "s3cret".into();
            u.phone = vec!["555-1234".into()];
        })
        .unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        assert!(!editor.is_editing());
        let account = editor.account(&key("a@b.com")).unwrap();
        assert_eq!(account.password, "s3cret");
        assert_eq!(account.phone, vec!["555-1234".to_string()]);
    }

    #[test]
    fn test_unchanged_edit_is_noop() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();
        editor.save_all(true).unwrap();
        let before = editor.document().clone();

        let outcome = edit(&mut editor, |_| {}).unwrap();

        assert_eq!(outcome, UpdateOutcome::Unchanged);
        assert_eq!(editor.document(), &before);
        assert!(!editor.is_dirty());
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_rename_moves_account() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();
        editor.create_service(ServiceForm::named("Mail")).unwrap();

        edit(&mut editor, |u| u.email = "new@b.com".into()).unwrap();

        assert!(!editor.document().accounts.contains_key("a@b.com"));
        let moved = editor.account(&key("new@b.com")).unwrap();
        assert_eq!(moved.services[0].name, "Mail");
        assert_eq!(editor.selected_account(), Some(&key("new@b.com")));
    }

    #[test]
    fn test_rename_onto_existing_fails() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("c@d.com").unwrap();
        editor.create_account("a@b.com").unwrap();
        let before = editor.document().clone();

        let err = edit(&mut editor, |u| u.email = "c@d.com".into()).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(editor.document(), &before);
        assert_eq!(editor.selected_account(), Some(&key("a@b.com")));
    }

    #[test]
    fn test_rename_to_reserved_or_empty_fails() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();

        assert!(edit(&mut editor, |u| u.email = "OTHERS".into())
            .unwrap_err()
            .is_validation());
        assert!(edit(&mut editor, |u| u.email = " ".into())
            .unwrap_err()
            .is_validation());
        assert!(editor.document().accounts.contains_key("a@b.com"));
    }

    #[test]
    fn test_others_email_cannot_change() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.select_account(AccountKey::Others).unwrap();

        let outcome = edit(&mut editor, |u| {
            u.email = "hijack@x.com".into();
            u.password = "pw".into();
        })
        .unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        assert!(editor.document().accounts.is_empty());
        assert_eq!(editor.document().others.password.as_deref(), Some("pw"));
        assert_eq!(editor.selected_account(), Some(&AccountKey::Others));
    }

    #[test]
    fn test_others_unchanged_edit_keeps_empty_bucket() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.select_account(AccountKey::Others).unwrap();

        let outcome = edit(&mut editor, |_| {}).unwrap();
        assert_eq!(outcome, UpdateOutcome::Unchanged);
        assert_eq!(serde_json::to_string(&editor.document().others).unwrap(), "{}");
    }

    #[test]
    fn test_cancel_edit_relocks() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();

        editor.begin_edit().unwrap();
        assert!(editor.is_editing());
        editor.cancel_edit();
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_delete_account() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();

        let removed = editor.delete_account(Decision::Confirmed).unwrap();
        assert!(removed.is_some());
        assert!(editor.document().accounts.is_empty());
        assert!(editor.selected_account().is_none());
    }

    #[test]
    fn test_delete_declined_keeps_account() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_account("a@b.com").unwrap();

        assert!(editor.delete_account(Decision::Declined).unwrap().is_none());
        assert!(editor.document().accounts.contains_key("a@b.com"));
        assert_eq!(editor.selected_account(), Some(&key("a@b.com")));
    }

    #[test]
    fn test_delete_others_always_fails() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.select_account(AccountKey::Others).unwrap();
        editor.create_service(ServiceForm::named("Wifi")).unwrap();
        let others = editor.document().others.clone();

        let err = editor.delete_account(Decision::Confirmed).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(editor.document().others, others);
    }

    #[test]
    fn test_delete_without_selection_fails() {
        let (_temp_dir, mut editor) = create_test_editor();
        assert!(editor
            .delete_account(Decision::Confirmed)
            .unwrap_err()
            .is_validation());
    }
}
