use unicode_width::UnicodeWidthStr;

/// Single-line text input with a character-indexed cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorBuffer {
    content: String,
    cursor: usize,
}

impl CursorBuffer {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[must_use]
    pub fn cursor_char_pos(&self) -> usize {
        self.cursor
    }

    /// Terminal columns occupied by the text left of the cursor.
    #[must_use]
    pub fn cursor_display_pos(&self) -> usize {
        self.content[..self.byte_pos()].width()
    }

    fn byte_pos(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_pos();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_pos();
        self.content.remove(at);
        true
    }

    pub fn delete_char_after(&mut self) -> bool {
        if self.cursor >= self.content.chars().count() {
            return false;
        }
        let at = self.byte_pos();
        self.content.remove(at);
        true
    }

    pub fn delete_word_before(&mut self) {
        let end = self.byte_pos();
        let chars: Vec<char> = self.content[..end].chars().collect();
        let mut pos = chars.len();
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        self.cursor = pos;
        let start = self.byte_pos();
        self.content.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.move_to_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_cursor() {
        let mut buf = CursorBuffer::new("held");
        buf.move_left();
        buf.insert_char('l');
        buf.insert_char('o');
        assert_eq!(buf.content(), "hellod");
        assert_eq!(buf.cursor_char_pos(), 5);
    }

    #[test]
    fn multibyte_characters_move_as_one() {
        let mut buf = CursorBuffer::new("a🎉b");
        buf.move_left();
        buf.delete_char_before();
        assert_eq!(buf.content(), "ab");
        assert_eq!(buf.cursor_char_pos(), 1);
    }

    #[test]
    fn display_pos_counts_wide_glyphs() {
        let mut buf = CursorBuffer::new("日本");
        assert_eq!(buf.cursor_display_pos(), 4);
        buf.move_left();
        assert_eq!(buf.cursor_display_pos(), 2);
    }

    #[test]
    fn delete_word_before_stops_at_whitespace() {
        let mut buf = CursorBuffer::new("design review  ");
        buf.delete_word_before();
        assert_eq!(buf.content(), "design ");
        buf.delete_word_before();
        assert_eq!(buf.content(), "");
        assert_eq!(buf.cursor_char_pos(), 0);
    }

    #[test]
    fn delete_after_at_end_is_noop() {
        let mut buf = CursorBuffer::new("ab");
        assert!(!buf.delete_char_after());
        buf.move_to_start();
        assert!(buf.delete_char_after());
        assert_eq!(buf.content(), "b");
    }
}
