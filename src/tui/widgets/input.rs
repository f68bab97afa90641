//! Text input widget
//!
//! A single-line text field with a character-based cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// A simple text input field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
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
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::Gray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.content.is_empty() && !self.focused {
            let line = Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        // Keep the cursor visible by scrolling the text horizontally
        let visible = inner.width as usize;
        let offset = (self.cursor + 1).saturating_sub(visible);
        let shown: String = self.content.chars().skip(offset).take(visible).collect();
        buf.set_string(inner.x, inner.y, &shown, Style::default().fg(Color::White));

        if self.focused {
            let cursor_x = inner.x + (self.cursor - offset) as u16;
            if cursor_x < inner.x + inner.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    inner.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(text: &str) -> TextInput {
        let mut input = TextInput::new();
        input.set_content(text);
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Tea".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Tea");

        input.backspace();
        assert_eq!(input.value(), "Te");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = input_with("Cofee");
        input.move_start();
        input.move_right();
        input.move_right();
        input.insert('f');
        assert_eq!(input.value(), "Coffee");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = input_with("café");
        input.backspace();
        assert_eq!(input.value(), "caf");

        let mut input = input_with("€5");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = input_with("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_set_empty_content_resets_cursor() {
        let mut input = input_with("10");
        input.set_content("");
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_render_placeholder() {
        let input = TextInput::new().placeholder("Amount");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        (&input).render(area, &mut buf);

        let row: String = buf.content()[20..40].iter().map(|c| c.symbol()).collect();
        assert!(row.contains("Amount"));
    }
}
