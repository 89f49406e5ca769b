use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Editable draft text with a cursor.
///
/// Backs the compose dialog, the reply box and the search field. The cursor
/// is a character index (not a byte offset), so multi-byte input edits
/// cleanly.
///
/// Features:
/// - Basic text editing (insert, delete, backspace)
/// - Cursor movement (left/right/home/end)
/// - Explicit newlines for multi-line drafts
/// - Conversion to styled lines with a block cursor for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    /// The text content
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
}

impl DraftInput {
    /// Create a new empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of a character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert a whole string at the cursor (used for pastes)
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            // Normalize CRLF pastes to plain newlines
            if c != '\r' {
                self.insert_char(c);
            }
        }
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character at the current cursor position (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_count() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    /// Get the current text content
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the content and put the cursor at the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor_position = self.char_count();
    }

    /// Clear all content and reset cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Build display lines for a `Paragraph`.
    ///
    /// An empty draft shows `placeholder` in `placeholder_style`. When
    /// `show_cursor` is set, the character under the cursor is drawn
    /// reversed (a blank cell at line ends).
    pub fn to_lines(
        &self,
        text_style: Style,
        placeholder: &str,
        placeholder_style: Style,
        show_cursor: bool,
    ) -> Vec<Line<'static>> {
        let cursor_style = text_style.add_modifier(Modifier::REVERSED);

        if self.is_empty() {
            let mut spans = Vec::new();
            if show_cursor {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(placeholder.to_string(), placeholder_style));
            return vec![Line::from(spans)];
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut spans: Vec<Span<'static>> = Vec::new();

        let flush = |current: &mut String, spans: &mut Vec<Span<'static>>| {
            if !current.is_empty() {
                spans.push(Span::styled(std::mem::take(current), text_style));
            }
        };

        for (i, c) in self.content.chars().enumerate() {
            let at_cursor = show_cursor && i == self.cursor_position;
            if c == '\n' {
                flush(&mut current, &mut spans);
                if at_cursor {
                    spans.push(Span::styled(" ", cursor_style));
                }
                lines.push(Line::from(std::mem::take(&mut spans)));
                continue;
            }
            if at_cursor {
                flush(&mut current, &mut spans);
                spans.push(Span::styled(c.to_string(), cursor_style));
            } else {
                current.push(c);
            }
        }

        flush(&mut current, &mut spans);
        if show_cursor && self.cursor_position >= self.char_count() {
            spans.push(Span::styled(" ", cursor_style));
        }
        lines.push(Line::from(spans));
        lines
    }
}
