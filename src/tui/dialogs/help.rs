//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("s", "Save to disk"),
        key_line("r", "Reload from disk"),
        key_line("Tab", "Switch panel focus"),
        key_line("j/k", "Move selection down/up"),
        Line::from(""),
        heading("Accounts"),
        Line::from(""),
        key_line("n", "New account"),
        key_line("e", "Edit selected account"),
        key_line("d", "Delete selected account"),
        Line::from(""),
        heading("Services"),
        Line::from(""),
        key_line("a", "Add service"),
        key_line("Enter/E", "Edit selected service"),
        key_line("d", "Delete selected service"),
        key_line("/", "Filter services by name"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
