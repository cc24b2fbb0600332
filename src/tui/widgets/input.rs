//! Text input widget
//!
//! A single-line text field with a character-based cursor. Secret fields
//! render as bullets.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Render the content masked
    pub secret: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mask the content when rendering
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    /// Set content and put the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.len();
        self
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of a character position
    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Build the `label: value` line, with a block cursor when focused
    pub fn to_line(&self, focused: bool, label_width: usize) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut spans = vec![Span::styled(
            format!("{:<width$} ", format!("{}:", self.label), width = label_width + 1),
            label_style,
        )];

        let shown: Vec<char> = if self.secret {
            std::iter::repeat('•').take(self.len()).collect()
        } else {
            self.content.chars().collect()
        };

        if shown.is_empty() && !focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
            return Line::from(spans);
        }

        let value_style = Style::default().fg(Color::White);
        if focused {
            let cursor = self.cursor.min(shown.len());
            let before: String = shown[..cursor].iter().collect();
            let under = shown.get(cursor).copied().unwrap_or(' ');
            let after: String = shown.iter().skip(cursor + 1).collect();

            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(
                under.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, value_style));
        } else {
            spans.push(Span::styled(shown.into_iter().collect::<String>(), value_style));
        }

        Line::from(spans)
    }
}
