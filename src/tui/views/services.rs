//! Services view (main panel)
//!
//! The filtered services of the selected account, with the service under
//! the cursor shown in full below.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::border_style;
use crate::display::format_service_details;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;

/// Render the services panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    render_list(frame, app, layout.services);
    render_details(frame, app, layout.details);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let account = app
        .editor
        .selected_account()
        .map(ToString::to_string)
        .unwrap_or_default();
    let mut title = format!(" Services: {} ", account);
    if !app.search_query.is_empty() {
        title.push_str(&format!("[/{}] ", app.search_query));
    }

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(border_style(app, FocusedPanel::Services));

    let services = app
        .editor
        .selected_account()
        .and_then(|key| app.editor.services(key))
        .unwrap_or_default();
    let visible = app.visible_services();

    if visible.is_empty() {
        let hint = if services.is_empty() {
            "No services. Press 'a' to add one."
        } else {
            "No services match the search."
        };
        let paragraph = Paragraph::new(hint)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .filter_map(|&index| services.get(index).map(|service| (index, service)))
        .map(|(index, service)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", index), Style::default().fg(Color::DarkGray)),
                Span::styled(service.display_name().to_string(), Style::default().fg(Color::White)),
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
    if app.focused_panel == FocusedPanel::Services {
        state.select(Some(app.service_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let text = match (app.editor.selected_service_index(), app.editor.selected_service()) {
        (Some(index), Some(service)) => format_service_details(index, service, false),
        _ => String::from("Select a service to see its fields."),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
