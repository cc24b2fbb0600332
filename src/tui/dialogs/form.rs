//! Shared form state for the entry dialogs
//!
//! A form is a column of text inputs with one focused at a time. Tab moves
//! between fields, Enter submits and Esc cancels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// What a key press asks of the dialog's owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key consumed by the form
    None,
    Submit,
    Cancel,
}

/// A column of labelled inputs
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: Vec<TextInput>,
    pub focused: usize,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn new(fields: Vec<TextInput>) -> Self {
        Self {
            fields,
            focused: 0,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Current value of field `index`
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", TextInput::value)
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Route a key press to the focused input
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.prev_field(),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            _ => {
                let Some(input) = self.fields.get_mut(self.focused) else {
                    return FormAction::None;
                };
                match key.code {
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    KeyCode::Char(c) => input.insert(c),
                    _ => return FormAction::None,
                }
                self.error_message = None;
            }
        }
        FormAction::None
    }
}

/// Render a form as a centered modal
pub fn render(frame: &mut Frame, title: &str, form: &FormState) {
    let height = form.fields.len() as u16 + 6;
    let area = centered_rect_fixed(70, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    frame.render_widget(block, area);

    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| field.to_line(i == form.focused, label_width))
        .collect();

    lines.push(Line::from(""));
    lines.push(match &form.error_message {
        Some(error) => Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))),
        None => Line::from(""),
    });
    lines.push(Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_form() -> FormState {
        FormState::new(vec![
            TextInput::new().label("Email"),
            TextInput::new().label("Password"),
        ])
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = sample_form();
        form.handle_key(key(KeyCode::Char('a')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('b')));

        assert_eq!(form.value(0), "a");
        assert_eq!(form.value(1), "b");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = sample_form();
        form.prev_field();
        assert_eq!(form.focused, 1);
        form.next_field();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_submit_cancel_and_error_clearing() {
        let mut form = sample_form();
        form.set_error("bad");
        assert_eq!(form.handle_key(key(KeyCode::Char('x'))), FormAction::None);
        assert!(form.error_message.is_none());

        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
    }
}
