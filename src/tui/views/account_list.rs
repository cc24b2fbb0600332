//! Account list view (sidebar)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::border_style;
use crate::models::AccountKey;
use crate::tui::app::{App, FocusedPanel};

/// Render the accounts list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.editor.is_dirty() {
        " Accounts [+] "
    } else {
        " Accounts "
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(border_style(app, FocusedPanel::Accounts));

    let items: Vec<ListItem> = app
        .account_keys()
        .into_iter()
        .map(|key| {
            let count = app.editor.services(&key).map_or(0, |services| services.len());
            let style = match key {
                AccountKey::Others => Style::default().fg(Color::Magenta),
                AccountKey::Account(_) => Style::default().fg(Color::White),
            };
            ListItem::new(Line::from(vec![
                Span::styled(key.to_string(), style),
                Span::styled(format!(" ({})", count), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.account_index));

    frame.render_stateful_widget(list, area, &mut state);
}
