//! Confirmation dialog
//!
//! Yes/no questions guarding deletes and exiting with unsaved edits.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// What a confirmation is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteAccount(String),
    DeleteService(String),
    /// Exit with unsaved edits: yes saves, no discards
    SaveOnExit,
    /// Reload from disk, dropping unsaved edits
    Reload,
}

impl ConfirmAction {
    /// The question shown to the user
    pub fn message(&self) -> String {
        match self {
            Self::DeleteAccount(key) => {
                format!("Delete account '{}' and all of its services?", key)
            }
            Self::DeleteService(name) => format!("Delete service '{}'?", name),
            Self::SaveOnExit => "Save changes before exiting?".to_string(),
            Self::Reload => "Discard unsaved changes and reload the file?".to_string(),
        }
    }
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_rect_fixed(56, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(action.message(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
