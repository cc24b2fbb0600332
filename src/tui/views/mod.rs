//! TUI Views module
//!
//! The accounts list, the services panel and the status bar, with the open
//! dialog drawn on top.

pub mod account_list;
pub mod services;
pub mod status_bar;

use ratatui::style::{Color, Style};
use ratatui::Frame;

use super::app::{ActiveDialog, App, FocusedPanel};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    account_list::render(frame, app, layout.sidebar);
    services::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    render_dialog(frame, app);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, action),
        ActiveDialog::NewAccount => dialogs::form::render(frame, "New Account", &app.prompt),
        ActiveDialog::Search => dialogs::form::render(frame, "Search Services", &app.prompt),
        ActiveDialog::EditAccount => {
            dialogs::form::render(frame, "Edit Account", &app.account_form.form)
        }
        ActiveDialog::Service => {
            dialogs::form::render(frame, app.service_form.title(), &app.service_form.form)
        }
    }
}

/// Border style for a panel depending on focus
fn border_style(app: &App, panel: FocusedPanel) -> Style {
    if app.focused_panel == panel {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}
