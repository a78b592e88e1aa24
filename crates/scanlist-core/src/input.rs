//! Pending text for the item input field.

/// Single-line edit buffer with a byte-indexed cursor that always sits on
/// a char boundary.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    /// Creates an empty buffer with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `c` at the cursor and moves the cursor past it.
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Removes the char before the cursor. No-op at the start.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    /// Removes the char under the cursor. No-op at the end.
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Moves the cursor one char to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Moves the cursor one char to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Empties the buffer, e.g. after the text was added as an item.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in chars, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        text.chars().for_each(|c| input.insert_char(c));
        input
    }

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_column(), 0);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = typed("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_backspace_and_delete_at_edges_are_noops() {
        let mut input = InputState::new();
        input.backspace();
        input.delete();
        assert_eq!(input.as_str(), "");

        let mut input = typed("ab");
        input.delete();
        assert_eq!(input.as_str(), "ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "ab");
    }

    #[test]
    fn test_whitespace_is_kept() {
        let input = typed("  \t ");
        assert!(!input.is_empty());
        assert_eq!(input.as_str(), "  \t ");
    }

    #[test]
    fn test_multibyte_editing_keeps_char_boundaries() {
        let mut input = typed("aé中");
        assert_eq!(input.cursor_column(), 3);

        input.move_left();
        input.backspace();
        assert_eq!(input.as_str(), "a中");
        assert_eq!(input.cursor_column(), 1);

        input.move_right();
        assert_eq!(input.cursor_column(), 2);
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "中");
        input.move_end();
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = typed("milk");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_column(), 0);
    }
}
