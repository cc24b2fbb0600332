//! Status bar view
//!
//! Shows the data file and service total, the unsaved marker, the last
//! message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, StatusKind};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.editor.path().display()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("({} services) ", app.editor.document().service_count()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if app.editor.is_dirty() {
        spans.push(Span::styled(
            "[modified]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some((kind, message)) = &app.status_message {
        let color = match kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(color)));
    }

    let hints = " q:Quit  s:Save  ?:Help ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
