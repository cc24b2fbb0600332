//! Application state for the TUI
//!
//! The App struct owns the record editor plus everything needed for
//! rendering: focus, list cursors, the open dialog and the status line.
//! List cursors are positions in what is on screen; the editor's selection
//! follows them.

use crate::editor::{matching_services, Decision, RecordEditor, UpdateOutcome};
use crate::error::AcctreeResult;
use crate::models::{AccountKey, ServiceForm};
use crate::tui::widgets::TextInput;

use super::dialogs::{AccountFormState, ConfirmAction, FormState, ServiceFormState};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Accounts,
    Services,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    NewAccount,
    EditAccount,
    Service,
    Search,
    Confirm(ConfirmAction),
}

/// Severity of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Main application state
pub struct App {
    /// The record editor holding the document
    pub editor: RecordEditor,

    /// Ask to save unsaved edits on exit
    pub confirm_on_exit: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Cursor in the accounts list
    pub account_index: usize,

    /// Cursor in the filtered services list
    pub service_index: usize,

    /// Service name filter
    pub search_query: String,

    /// Status message to display
    pub status_message: Option<(StatusKind, String)>,

    /// Single-line prompt for new account email and search
    pub prompt: FormState,

    pub account_form: AccountFormState,

    pub service_form: ServiceFormState,
}

impl App {
    /// Create a new App around an opened editor
    pub fn new(editor: RecordEditor, confirm_on_exit: bool) -> Self {
        let mut app = Self {
            editor,
            confirm_on_exit,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            account_index: 0,
            service_index: 0,
            search_query: String::new(),
            status_message: None,
            prompt: FormState::default(),
            account_form: AccountFormState::default(),
            service_form: ServiceFormState::default(),
        };
        app.sync_account();
        app
    }

    // ---- status and lifecycle ----

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((StatusKind::Info, message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some((StatusKind::Error, message.into()));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Quit, asking first when there are unsaved edits
    pub fn request_quit(&mut self) {
        if self.confirm_on_exit && self.editor.is_dirty() {
            self.open_dialog(ActiveDialog::Confirm(ConfirmAction::SaveOnExit));
        } else {
            self.should_quit = true;
        }
    }

    /// Save the document and report the outcome
    pub fn save(&mut self) -> bool {
        match self.editor.save_all(false) {
            Ok(notice) => {
                self.set_status(notice.unwrap_or_default());
                true
            }
            Err(e) => {
                self.set_error(format!("Error saving JSON file: {}", e));
                false
            }
        }
    }

    // ---- dialogs ----

    /// Open a dialog, preparing its state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::NewAccount => {
                self.prompt = FormState::new(vec![TextInput::new()
                    .label("Email")
                    .placeholder("name@example.com")]);
            }
            ActiveDialog::Search => {
                self.prompt = FormState::new(vec![TextInput::new()
                    .label("Service name")
                    .content(self.search_query.as_str())]);
            }
            ActiveDialog::EditAccount => match self.editor.begin_edit() {
                Ok(snapshot) => self.account_form = AccountFormState::from_update(&snapshot),
                Err(e) => {
                    self.set_error(e.to_string());
                    return;
                }
            },
            ActiveDialog::Service => {
                self.service_form = match self.editor.selected_service() {
                    Some(service) => ServiceFormState::from_form(
                        &ServiceForm::from_service(service),
                        self.editor.selected_service_index(),
                    ),
                    None => ServiceFormState::new(),
                };
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        if self.active_dialog == ActiveDialog::EditAccount {
            self.editor.cancel_edit();
        }
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    // ---- navigation ----

    pub fn account_keys(&self) -> Vec<AccountKey> {
        self.editor.account_keys()
    }

    /// Indices of the services shown for the selected account
    pub fn visible_services(&self) -> Vec<usize> {
        self.editor
            .selected_account()
            .and_then(|key| self.editor.services(key))
            .map(|services| {
                matching_services(services, &self.search_query)
                    .into_iter()
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Accounts => FocusedPanel::Services,
            FocusedPanel::Services => FocusedPanel::Accounts,
        };
        self.sync_service();
    }

    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Accounts => {
                if self.account_index > 0 {
                    self.account_index -= 1;
                    self.sync_account();
                }
            }
            FocusedPanel::Services => {
                if self.service_index > 0 {
                    self.service_index -= 1;
                    self.sync_service();
                }
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Accounts => {
                if self.account_index + 1 < self.account_keys().len() {
                    self.account_index += 1;
                    self.sync_account();
                }
            }
            FocusedPanel::Services => {
                if self.service_index + 1 < self.visible_services().len() {
                    self.service_index += 1;
                    self.sync_service();
                }
            }
        }
    }

    /// Point the editor at the account under the cursor
    pub fn sync_account(&mut self) {
        let keys = self.account_keys();
        self.account_index = self.account_index.min(keys.len().saturating_sub(1));
        self.service_index = 0;
        if let Some(key) = keys.get(self.account_index) {
            if let Err(e) = self.editor.select_account(key.clone()) {
                self.set_error(e.to_string());
            }
        }
    }

    /// Point the editor at the service under the cursor, if the services
    /// panel has focus
    pub fn sync_service(&mut self) {
        let visible = self.visible_services();
        self.service_index = self.service_index.min(visible.len().saturating_sub(1));

        if self.focused_panel != FocusedPanel::Services {
            return;
        }
        match visible.get(self.service_index) {
            Some(&index) => {
                if let Err(e) = self.editor.select_service(index) {
                    self.set_error(e.to_string());
                }
            }
            None => self.editor.clear_service_selection(),
        }
    }

    /// Move the account cursor onto the editor's selected account
    fn follow_selected_account(&mut self) {
        if let Some(selected) = self.editor.selected_account().cloned() {
            if let Some(pos) = self.account_keys().iter().position(|k| *k == selected) {
                self.account_index = pos;
            }
        }
        self.service_index = 0;
    }

    // ---- operations ----

    pub fn submit_new_account(&mut self) -> AcctreeResult<()> {
        let key = self.editor.create_account(self.prompt.value(0))?;
        self.follow_selected_account();
        self.set_status(format!("Account '{}' created", key));
        Ok(())
    }

    pub fn submit_account_edit(&mut self) -> AcctreeResult<()> {
        match self.editor.update_account(self.account_form.to_update())? {
            UpdateOutcome::Unchanged => self.set_status("No changes to save."),
            UpdateOutcome::Updated => {
                self.follow_selected_account();
                self.set_status("Account updated. Press 's' to save.");
            }
        }
        Ok(())
    }

    pub fn submit_service(&mut self) -> AcctreeResult<()> {
        let form = self.service_form.to_form();
        if self.service_form.editing.is_some() {
            self.editor.update_service(form)?;
            self.set_status("Service updated. Press 's' to save.");
        } else {
            self.editor.create_service(form)?;
            self.set_status("Service added. Press 's' to save.");
        }
        self.sync_service();
        Ok(())
    }

    /// Ask before deleting whatever the focused panel points at
    pub fn request_delete(&mut self) {
        let action = match self.focused_panel {
            FocusedPanel::Accounts => match self.editor.selected_account() {
                Some(AccountKey::Others) => {
                    self.set_error("OTHERS is reserved and cannot be deleted.");
                    return;
                }
                Some(key) => ConfirmAction::DeleteAccount(key.to_string()),
                None => return,
            },
            FocusedPanel::Services => match self.editor.selected_service() {
                Some(service) => ConfirmAction::DeleteService(service.display_name().to_string()),
                None => {
                    self.set_error("Select a service first.");
                    return;
                }
            },
        };
        self.open_dialog(ActiveDialog::Confirm(action));
    }

    /// Carry out a confirmation answer; `None` means the dialog was cancelled
    pub fn resolve_confirm(&mut self, action: ConfirmAction, answer: Option<bool>) {
        self.active_dialog = ActiveDialog::None;
        let Some(confirmed) = answer else {
            return;
        };

        match action {
            ConfirmAction::DeleteAccount(key) => {
                match self.editor.delete_account(Decision::from_bool(confirmed)) {
                    Ok(Some(_)) => {
                        self.sync_account();
                        self.set_status(format!("Account '{}' deleted", key));
                    }
                    Ok(None) => {}
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            ConfirmAction::DeleteService(name) => {
                match self.editor.delete_service(Decision::from_bool(confirmed)) {
                    Ok(Some(_)) => {
                        self.sync_service();
                        self.set_status(format!("Service '{}' deleted", name));
                    }
                    Ok(None) => {}
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            ConfirmAction::SaveOnExit => {
                if !confirmed || self.save() {
                    self.should_quit = true;
                }
            }
            ConfirmAction::Reload => {
                if confirmed {
                    self.reload();
                }
            }
        }
    }

    /// Reload the data file, asking first when there are unsaved edits
    pub fn request_reload(&mut self) {
        if self.editor.is_dirty() {
            self.open_dialog(ActiveDialog::Confirm(ConfirmAction::Reload));
        } else {
            self.reload();
        }
    }

    fn reload(&mut self) {
        let warning = self.editor.reload();
        self.account_index = 0;
        self.service_index = 0;
        self.search_query.clear();
        self.sync_account();
        match warning {
            Some(e) => self.set_error(format!("Error loading JSON file: {}", e)),
            None => self.set_status("Reloaded from disk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use crate::storage::DocumentStore;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let store = DocumentStore::new(temp_dir.path().join("data.json"));
        let mut editor = RecordEditor::with_document(store, Document::empty());
        editor.create_account("a@b.com").unwrap();
        editor.create_account("c@d.com").unwrap();
        (temp_dir, App::new(editor, true))
    }

    #[test]
    fn test_cursor_drives_selection() {
        let (_temp_dir, mut app) = create_test_app();
        assert_eq!(
            app.editor.selected_account(),
            Some(&AccountKey::Account("a@b.com".into()))
        );

        app.move_down();
        app.move_down();
        assert_eq!(app.editor.selected_account(), Some(&AccountKey::Others));

        app.move_down();
        assert_eq!(app.account_index, 2);
    }

    #[test]
    fn test_search_filters_services() {
        let (_temp_dir, mut app) = create_test_app();
        for name in ["Gmail", "Bank", "Mailchimp"] {
            app.editor.create_service(ServiceForm::named(name)).unwrap();
        }

        app.search_query = "mail".into();
        assert_eq!(app.visible_services(), vec![0, 2]);

        app.toggle_panel_focus();
        app.move_down();
        assert_eq!(app.editor.selected_service_index(), Some(2));
    }

    #[test]
    fn test_quit_with_unsaved_edits_asks() {
        let (_temp_dir, mut app) = create_test_app();
        app.request_quit();
        assert!(!app.should_quit);
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::SaveOnExit)
        );

        app.resolve_confirm(ConfirmAction::SaveOnExit, Some(false));
        assert!(app.should_quit);
        assert!(app.editor.is_dirty());
    }

    #[test]
    fn test_quit_saving() {
        let (temp_dir, mut app) = create_test_app();
        app.resolve_confirm(ConfirmAction::SaveOnExit, Some(true));
        assert!(app.should_quit);
        assert!(temp_dir.path().join("data.json").exists());
    }

    #[test]
    fn test_cancelled_quit_stays() {
        let (_temp_dir, mut app) = create_test_app();
        app.resolve_confirm(ConfirmAction::SaveOnExit, None);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_delete_others_refused() {
        let (_temp_dir, mut app) = create_test_app();
        app.account_index = 2;
        app.sync_account();

        app.request_delete();
        assert!(!app.has_dialog());
        assert!(matches!(app.status_message, Some((StatusKind::Error, _))));
    }

    #[test]
    fn test_edit_dialog_closing_ends_session() {
        let (_temp_dir, mut app) = create_test_app();
        app.open_dialog(ActiveDialog::EditAccount);
        assert!(app.editor.is_editing());

        app.close_dialog();
        assert!(!app.editor.is_editing());
    }

    #[test]
    fn test_rename_follows_account() {
        let (_temp_dir, mut app) = create_test_app();
        app.open_dialog(ActiveDialog::EditAccount);
        app.account_form.form.fields[0] = TextInput::new().content("z@z.com");

        app.submit_account_edit().unwrap();
        assert_eq!(app.account_index, 1);
        assert_eq!(app.account_keys()[1], AccountKey::Account("z@z.com".into()));
    }

    #[test]
    fn test_reload_asks_when_dirty() {
        let (_temp_dir, mut app) = create_test_app();
        assert!(app.save());
        app.editor.create_account("e@f.com").unwrap();

        app.request_reload();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::Reload)
        );

        app.resolve_confirm(ConfirmAction::Reload, Some(true));
        assert!(!app.editor.is_dirty());
        assert!(!app.editor.document().contains(&AccountKey::Account("e@f.com".into())));
        assert_eq!(app.account_keys().len(), 3);
    }

    #[test]
    fn test_filtered_out_service_is_not_targeted() {
        let (_temp_dir, mut app) = create_test_app();
        app.editor.create_service(ServiceForm::named("Bank")).unwrap();
        app.toggle_panel_focus();
        app.sync_service();
        assert!(app.editor.selected_service().is_some());

        app.search_query = "zzz".into();
        app.sync_service();
        assert!(app.visible_services().is_empty());
        assert!(app.editor.selected_service().is_none());

        app.request_delete();
        assert!(!app.has_dialog());
        assert!(matches!(app.status_message, Some((StatusKind::Error, _))));
    }
}
