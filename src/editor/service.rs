//! Service operations
//!
//! Services are addressed by position under the selected account. Creating
//! one appends it, updating replaces it wholesale from a form, and deleting
//! shifts later services down by one.

use log::debug;

use crate::audit::{generate_diff, AuditEntry, EntityType};
use crate::error::{AcctreeError, AcctreeResult};
use crate::models::{AccountKey, Service, ServiceForm};

use super::{to_json, Decision, RecordEditor};

/// Audit id of a service: `<account key>#<index>`
fn service_id(key: &AccountKey, index: usize) -> String {
    format!("{}#{}", key, index)
}

impl RecordEditor {
    /// Append a service to the selected account
    ///
    /// Returns the new service's index. The service selection is cleared.
    pub fn create_service(&mut self, form: ServiceForm) -> AcctreeResult<usize> {
        let key = self.require_account()?;
        if form.trimmed_name().is_empty() {
            return Err(AcctreeError::Validation("Service name is required.".into()));
        }

        let service = form.to_service();
        let name = service.name.clone();
        let services = self
            .document
            .services_mut(&key)
            .ok_or_else(|| AcctreeError::account_not_found(key.as_str()))?;
        services.push(service);
        let index = services.len() - 1;

        self.selected_service = None;
        self.mark_dirty();
        debug!("Added service {} under {}", name, key);
        self.record(AuditEntry::create(
            EntityType::Service,
            service_id(&key, index),
            Some(name),
        ));
        Ok(index)
    }

    /// Replace the selected service with the form's contents
    ///
    /// Fields left empty in the form become empty strings; nothing is merged
    /// from the old record.
    pub fn update_service(&mut self, form: ServiceForm) -> AcctreeResult<()> {
        let (key, index) = self.require_service()?;
        if form.trimmed_name().is_empty() {
            return Err(AcctreeError::Validation("Service name is required.".into()));
        }

        let replacement = form.to_service();
        let slot = self
            .document
            .services_mut(&key)
            .and_then(|services| services.get_mut(index))
            .ok_or_else(|| AcctreeError::service_not_found(service_id(&key, index)))?;

        let before = to_json(&*slot);
        *slot = replacement;
        let after = to_json(&*slot);
        let name = slot.name.clone();

        self.mark_dirty();
        debug!("Updated service {}", service_id(&key, index));
        self.record(AuditEntry::update(
            EntityType::Service,
            service_id(&key, index),
            Some(name),
            generate_diff(&before, &after),
        ));
        Ok(())
    }

    /// Delete the selected service
    ///
    /// A declined decision leaves everything as is and returns `None`.
    pub fn delete_service(&mut self, decision: Decision) -> AcctreeResult<Option<Service>> {
        let (key, index) = self.require_service()?;
        if decision == Decision::Declined {
            return Ok(None);
        }

        let services = self
            .document
            .services_mut(&key)
            .ok_or_else(|| AcctreeError::account_not_found(key.as_str()))?;
        if index >= services.len() {
            return Err(AcctreeError::service_not_found(service_id(&key, index)));
        }
        let removed = services.remove(index);

        self.selected_service = None;
        self.mark_dirty();
        debug!("Deleted service {} from {}", removed.name, key);
        self.record(AuditEntry::delete(
            EntityType::Service,
            service_id(&key, index),
            Some(removed.name.clone()),
        ));
        Ok(Some(removed))
    }

    fn require_service(&self) -> AcctreeResult<(AccountKey, usize)> {
        let key = self.require_account()?;
        let index = self
            .selected_service
            .ok_or_else(|| AcctreeError::Validation("Select a service first.".into()))?;
        Ok((key, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Details, Document};
    use crate::storage::DocumentStore;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_editor() -> (TempDir, RecordEditor) {
        let temp_dir = TempDir::new().unwrap();
        let store = DocumentStore::new(temp_dir.path().join("data.json"));
        let mut editor = RecordEditor::with_document(store, Document::empty());
        editor.create_account("a@b.com").unwrap();
        (temp_dir, editor)
    }

    fn names(editor: &RecordEditor) -> Vec<String> {
        let key = editor.selected_account().unwrap().clone();
        editor
            .services(&key)
            .unwrap()
            .iter()
            .map(|s| s.name.clone())
            .collect()
    }

    #[test]
    fn test_create_requires_account() {
        let temp_dir = TempDir::new().unwrap();
        let store = DocumentStore::new(temp_dir.path().join("data.json"));
        let mut editor = RecordEditor::with_document(store, Document::empty());

        let err = editor.create_service(ServiceForm::named("Mail")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_requires_name() {
        let (_temp_dir, mut editor) = create_test_editor();

        let err = editor.create_service(ServiceForm::named("   ")).unwrap_err();
        assert!(err.is_validation());
        assert!(names(&editor).is_empty());
    }

    #[test]
    fn test_create_appends_and_clears_selection() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_service(ServiceForm::named("Mail")).unwrap();
        editor.select_service(0).unwrap();

        let index = editor.create_service(ServiceForm::named("Bank")).unwrap();

        assert_eq!(index, 1);
        assert_eq!(names(&editor), vec!["Mail", "Bank"]);
        assert!(editor.selected_service_index().is_none());
    }

    #[test]
    fn test_details_parsing() {
        let (_temp_dir, mut editor) = create_test_editor();

        let mut form = ServiceForm::named("Mail");
        form.details = "{\"q\": \"a\"}".into();
        editor.create_service(form).unwrap();

        let mut form = ServiceForm::named("Bank");
        form.details = "not json".into();
        editor.create_service(form).unwrap();

        let mut form = ServiceForm::named("Shop");
        form.details = "   ".into();
        editor.create_service(form).unwrap();

        let services = editor.services(&AccountKey::Account("a@b.com".into())).unwrap();
        assert_eq!(services[0].details, Details::Json(json!({"q": "a"})));
        assert_eq!(services[1].details, Details::Text("not json".into()));
        assert_eq!(services[2].details, Details::Text(String::new()));
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let (_temp_dir, mut editor) = create_test_editor();
        let mut form = ServiceForm::named("Mail");
        form.username = "me".into();
        form.note = "old".into();
        editor.create_service(form).unwrap();
        editor.select_service(0).unwrap();

        let mut form = ServiceForm::named("Mail");
        form.password = "pw".into();
        editor.update_service(form).unwrap();

        let service = editor.selected_service().unwrap();
        assert_eq!(service.password, "pw");
        assert_eq!(service.username, "");
        assert_eq!(service.note, "");
    }

    #[test]
    fn test_update_requires_selection_and_name() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_service(ServiceForm::named("Mail")).unwrap();

        let err = editor.update_service(ServiceForm::named("X")).unwrap_err();
        assert!(err.is_validation());

        editor.select_service(0).unwrap();
        let err = editor.update_service(ServiceForm::named("")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(editor.selected_service().unwrap().name, "Mail");
    }

    #[test]
    fn test_delete_shifts_later_services() {
        let (_temp_dir, mut editor) = create_test_editor();
        for name in ["A", "B", "C"] {
            editor.create_service(ServiceForm::named(name)).unwrap();
        }
        editor.select_service(1).unwrap();

        let removed = editor.delete_service(Decision::Confirmed).unwrap();

        assert_eq!(removed.unwrap().name, "B");
        assert_eq!(names(&editor), vec!["A", "C"]);
        assert!(editor.selected_service_index().is_none());
    }

    #[test]
    fn test_delete_declined_keeps_service() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.create_service(ServiceForm::named("Mail")).unwrap();
        editor.select_service(0).unwrap();

        assert!(editor.delete_service(Decision::Declined).unwrap().is_none());
        assert_eq!(names(&editor), vec!["Mail"]);
        assert_eq!(editor.selected_service_index(), Some(0));
    }

    #[test]
    fn test_mail_scenario_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let mut editor = RecordEditor::with_document(DocumentStore::new(&path), Document::empty());

        editor.create_account("a@b.com").unwrap();
        editor.create_service(ServiceForm::named("Mail")).unwrap();
        editor.save_all(true).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let account = &saved["accounts"]["a@b.com"];
        assert_eq!(account["password"], "");
        assert_eq!(account["phone"], json!([]));
        assert!(!account["dateCreated"].as_str().unwrap().is_empty());
        assert_eq!(
            account["services"],
            json!([{
                "name": "Mail",
                "username": "",
                "email": "",
                "link": "",
                "webpage": "",
                "url": "",
                "password": "",
                "PIN": "",
                "phone": "",
                "dateCreated": "",
                "sign_in_with": "",
                "note": "",
                "details": ""
            }])
        );
        assert_eq!(saved["OTHERS"], json!({}));
    }

    #[test]
    fn test_others_services() {
        let (_temp_dir, mut editor) = create_test_editor();
        editor.select_account(AccountKey::Others).unwrap();

        editor.create_service(ServiceForm::named("Wifi")).unwrap();
        assert_eq!(editor.document().others.services()[0].name, "Wifi");
    }
}
