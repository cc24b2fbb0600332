//! Event handler for the TUI
//!
//! Routes key events to the open dialog, or to the focused panel when no
//! dialog is open. Operation errors end up in the status bar; nothing here
//! is fatal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, App, FocusedPanel};
use super::dialogs::{ConfirmAction, FormAction};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        _ => {}
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('s') => {
            app.save();
        }
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Char('/') => app.open_dialog(ActiveDialog::Search),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_panel_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('n') => app.open_dialog(ActiveDialog::NewAccount),
        KeyCode::Char('e') => app.open_dialog(ActiveDialog::EditAccount),
        KeyCode::Char('a') => open_add_service(app),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Enter | KeyCode::Char('E') => {
            if app.focused_panel == FocusedPanel::Accounts {
                app.toggle_panel_focus();
            } else if app.editor.selected_service().is_some() {
                app.open_dialog(ActiveDialog::Service);
            }
        }
        _ => {}
    }
}

fn open_add_service(app: &mut App) {
    if app.editor.selected_account().is_none() {
        app.set_error("Select an account first.");
        return;
    }
    app.focused_panel = FocusedPanel::Accounts;
    app.sync_account();
    app.open_dialog(ActiveDialog::Service);
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::None => {}
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Confirm(action) => handle_confirm_key(app, action, key),
        ActiveDialog::NewAccount => match app.prompt.handle_key(key) {
            FormAction::Submit => match app.submit_new_account() {
                Ok(()) => app.close_dialog(),
                Err(e) => app.prompt.set_error(e.to_string()),
            },
            FormAction::Cancel => app.close_dialog(),
            FormAction::None => {}
        },
        ActiveDialog::Search => {
            let action = app.prompt.handle_key(key);
            if action == FormAction::Cancel {
                app.search_query.clear();
            } else {
                app.search_query = app.prompt.value(0).to_string();
            }
            app.service_index = 0;
            app.sync_service();
            if action != FormAction::None {
                app.close_dialog();
            }
        }
        ActiveDialog::EditAccount => match app.account_form.form.handle_key(key) {
            FormAction::Submit => match app.submit_account_edit() {
                Ok(()) => app.close_dialog(),
                Err(e) => app.account_form.form.set_error(e.to_string()),
            },
            FormAction::Cancel => app.close_dialog(),
            FormAction::None => {}
        },
        ActiveDialog::Service => match app.service_form.form.handle_key(key) {
            FormAction::Submit => match app.submit_service() {
                Ok(()) => app.close_dialog(),
                Err(e) => app.service_form.form.set_error(e.to_string()),
            },
            FormAction::Cancel => app.close_dialog(),
            FormAction::None => {}
        },
    }
}

fn handle_confirm_key(app: &mut App, action: ConfirmAction, key: KeyEvent) {
    let answer = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(false),
        KeyCode::Esc => None,
        _ => return,
    };
    app.resolve_confirm(action, answer);
}
